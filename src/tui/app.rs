//! TUI application state and event handling.
//!
//! `App` wires the view-state [`Controller`] to the terminal:
//!
//! - **Intents**: keyboard [`Action`]s are interpreted for whichever layer has
//!   focus (search palette, detail overlay, landing screen, results screen)
//! - **Retrieval**: tickets handed out by the controller go to the
//!   [`RetrievalDispatcher`]; completions are drained once per loop iteration
//! - **Ephemeral UI state**: input buffers, list selections and transient
//!   status messages live here, never in the controller
//! - **Dirty tracking**: redraw only on change, on a spinner tick while
//!   loading, or every 100ms for resize handling

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::info;

use super::MAX_INPUT_LEN;
use super::events::{Action, poll_event};
use super::landing::{LandingItem, landing_items};
use super::palette::SearchPalette;
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_source_url;
use crate::controller::{Controller, RetrievalDispatcher, Ticket};
use crate::models::CaseFile;
use crate::retrieval::RetrievalService;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Rows moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which landing widget receives typing and Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingFocus {
    Input,
    Grid,
}

pub struct App {
    controller: Controller,
    dispatcher: RetrievalDispatcher,
    landing_items: Vec<LandingItem>,
    hero_input: String,
    landing_focus: LandingFocus,
    landing_idx: usize,
    results_idx: usize,
    detail_scroll: u16,
    palette: Option<SearchPalette>,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    spinner_frame: usize,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(service: Arc<RetrievalService>) -> Self {
        Self {
            controller: Controller::new(),
            dispatcher: RetrievalDispatcher::new(service),
            landing_items: landing_items(),
            hero_input: String::new(),
            landing_focus: LandingFocus::Input,
            landing_idx: 0,
            results_idx: 0,
            detail_scroll: 0,
            palette: None,
            should_quit: false,
            status_message: None,
            spinner_frame: 0,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.apply_completions();

            if self.controller.is_loading() {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.needs_redraw = true;
            }

            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            screen: self.controller.screen(),
            category: self.controller.selected_category(),
            query: self.controller.active_query(),
            records: self.controller.records(),
            is_loading: self.controller.is_loading(),
            last_status: self.controller.last_status(),
            detail: self.controller.detail(),
            landing_items: &self.landing_items,
            hero_input: &self.hero_input,
            landing_focus: self.landing_focus,
            landing_idx: self.landing_idx,
            results_idx: self.results_idx,
            detail_scroll: self.detail_scroll,
            palette: self.palette.as_ref(),
            status_message: self.status_message.as_ref(),
            spinner_frame: self.spinner_frame,
        }
    }

    /// Apply finished retrievals; stale ones are dropped by the controller
    fn apply_completions(&mut self) {
        if self.dispatcher.drain(&mut self.controller) > 0 {
            self.results_idx = 0;
            self.needs_redraw = true;
        }
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    fn dispatch(&mut self, ticket: Option<Ticket>) {
        if let Some(ticket) = ticket {
            self.results_idx = 0;
            self.dispatcher.dispatch(ticket);
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        self.needs_redraw = true;

        if action == Action::Quit {
            self.should_quit = true;
        } else if action == Action::GoHome {
            self.go_home();
        } else if self.palette.is_some() {
            self.handle_palette_action(action);
        } else if self.controller.detail().is_some() {
            self.handle_detail_action(action);
        } else if self.controller.is_results_mode() {
            self.handle_results_action(action);
        } else {
            self.handle_landing_action(action);
        }
    }

    fn go_home(&mut self) {
        info!("returning to landing screen");
        self.controller.go_home();
        self.hero_input.clear();
        self.palette = None;
        self.results_idx = 0;
    }

    fn open_palette(&mut self, seed: Option<char>) {
        let mut palette = SearchPalette::new();
        if let Some(c) = seed {
            palette.push(c);
        }
        self.palette = Some(palette);
    }

    fn handle_palette_action(&mut self, action: Action) {
        let Some(palette) = self.palette.as_mut() else {
            return;
        };

        match action {
            Action::Back | Action::OpenSearch => self.palette = None,
            Action::MoveUp => palette.move_selection(-1),
            Action::MoveDown => palette.move_selection(1),
            Action::PageUp => palette.move_selection(-PAGE_SIZE),
            Action::PageDown => palette.move_selection(PAGE_SIZE),
            Action::InsertChar(c) => palette.push(c),
            Action::DeleteChar => palette.pop(),
            Action::Submit => {
                if let Some(query) = palette.selected_entry() {
                    let ticket = self.controller.submit_search(&query);
                    if ticket.is_some() {
                        self.palette = None;
                    }
                    self.dispatch(ticket);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_action(&mut self, action: Action) {
        match action {
            Action::Back | Action::Submit => {
                self.controller.close_detail();
                self.detail_scroll = 0;
            }
            Action::MoveUp => self.scroll_detail(-1),
            Action::MoveDown => self.scroll_detail(1),
            Action::PageUp => self.scroll_detail(-PAGE_SIZE),
            Action::PageDown => self.scroll_detail(PAGE_SIZE),
            Action::CopySource => {
                if let Some(record) = self.controller.detail().cloned() {
                    self.copy_source(&record);
                }
            }
            _ => {}
        }
    }

    /// Rendering clamps the offset to the overlay's content
    fn scroll_detail(&mut self, delta: isize) {
        let next = (self.detail_scroll as isize + delta).clamp(0, u16::MAX as isize);
        self.detail_scroll = next as u16;
    }

    fn handle_results_action(&mut self, action: Action) {
        let total = self.controller.records().len();

        match action {
            Action::Back => self.go_home(),
            Action::OpenSearch | Action::InsertChar('/') => self.open_palette(None),
            Action::InsertChar(c) => self.open_palette(Some(c)),
            Action::MoveUp => self.results_idx = move_index(self.results_idx, -1, total),
            Action::MoveDown => self.results_idx = move_index(self.results_idx, 1, total),
            Action::PageUp => self.results_idx = move_index(self.results_idx, -PAGE_SIZE, total),
            Action::PageDown => self.results_idx = move_index(self.results_idx, PAGE_SIZE, total),
            Action::Submit => {
                if !self.controller.is_loading() && self.controller.open_detail_at(self.results_idx) {
                    self.detail_scroll = 0;
                }
            }
            Action::CopySource => match self.selected_record().cloned() {
                Some(record) => self.copy_source(&record),
                None => {
                    self.set_status("✗ No case file selected", MessageType::Error, STATUS_ERROR_DURATION_MS)
                }
            },
            Action::Refresh => {
                let ticket = self.controller.refresh();
                self.dispatch(ticket);
            }
            _ => {}
        }
    }

    fn handle_landing_action(&mut self, action: Action) {
        let total = self.landing_items.len();

        match action {
            Action::Back => {
                if self.hero_input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.hero_input.clear();
                }
            }
            Action::OpenSearch => self.open_palette(None),
            Action::ToggleFocus => {
                self.landing_focus = match self.landing_focus {
                    LandingFocus::Input => LandingFocus::Grid,
                    LandingFocus::Grid => LandingFocus::Input,
                };
            }
            Action::MoveUp | Action::MoveDown | Action::PageUp | Action::PageDown => {
                let delta = match action {
                    Action::MoveUp => -1,
                    Action::MoveDown => 1,
                    Action::PageUp => -PAGE_SIZE,
                    _ => PAGE_SIZE,
                };
                if self.landing_focus == LandingFocus::Input {
                    self.landing_focus = LandingFocus::Grid;
                } else {
                    self.landing_idx = move_index(self.landing_idx, delta, total);
                }
            }
            Action::InsertChar('/') if self.landing_focus == LandingFocus::Grid => {
                self.open_palette(None)
            }
            Action::InsertChar(c) => {
                self.landing_focus = LandingFocus::Input;
                if self.hero_input.chars().count() < MAX_INPUT_LEN {
                    self.hero_input.push(c);
                }
            }
            Action::DeleteChar => {
                self.hero_input.pop();
            }
            Action::Submit => match self.landing_focus {
                LandingFocus::Input => {
                    let ticket = self.controller.submit_search(&self.hero_input);
                    self.dispatch(ticket);
                }
                LandingFocus::Grid => match self.landing_items.get(self.landing_idx).copied() {
                    Some(LandingItem::Category(category)) => {
                        let ticket = self.controller.select_category(*category);
                        self.dispatch(Some(ticket));
                    }
                    Some(LandingItem::QuickTag(tag)) => {
                        let ticket = self.controller.submit_search(tag);
                        self.dispatch(ticket);
                    }
                    None => {}
                },
            },
            Action::CopySource => {
                self.set_status("✗ No case file selected", MessageType::Error, STATUS_ERROR_DURATION_MS)
            }
            _ => {}
        }
    }

    fn selected_record(&self) -> Option<&CaseFile> {
        if self.controller.is_loading() {
            return None;
        }
        self.controller.records().get(self.results_idx)
    }

    fn copy_source(&mut self, record: &CaseFile) {
        match copy_source_url(record) {
            Ok(url) => self.set_status(
                format!("✓ Copied source link: {}", url),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}

/// Move a list index by `delta`, clamped to `0..total`
fn move_index(current: usize, delta: isize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let next = (current as isize + delta).max(0) as usize;
    next.min(total - 1)
}
