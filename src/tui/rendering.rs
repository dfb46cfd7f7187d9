use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{LandingFocus, MessageType, StatusMessage};
use super::landing::LandingItem;
use super::layout::{AppLayout, LandingLayout, ResultsLayout, centered_rect};
use super::palette::SearchPalette;
use super::timestamps::format_fetch_age;
use crate::controller::{FetchStatus, Screen};
use crate::models::{CaseFile, CategoryDescriptor};

const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);
const WARM: Color = Color::Rgb(255, 140, 66);

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const SKELETON_ROWS: usize = 5;

/// Everything the renderer reads, borrowed from the app for one frame
pub struct RenderState<'a> {
    pub screen: Screen,
    pub category: Option<&'a CategoryDescriptor>,
    pub query: Option<&'a str>,
    pub records: &'a [CaseFile],
    pub is_loading: bool,
    pub last_status: Option<&'a FetchStatus>,
    pub detail: Option<&'a CaseFile>,
    pub landing_items: &'a [LandingItem],
    pub hero_input: &'a str,
    pub landing_focus: LandingFocus,
    pub landing_idx: usize,
    pub results_idx: usize,
    pub detail_scroll: u16,
    pub palette: Option<&'a SearchPalette>,
    pub status_message: Option<&'a StatusMessage>,
    pub spinner_frame: usize,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area, state);

    if state.screen == Screen::Landing {
        let landing = LandingLayout::new(layout.body_area);
        render_hero_input(frame, landing.input_area, state);
        render_landing_list(frame, landing.grid_area, state);
    } else {
        let results = ResultsLayout::new(layout.body_area);
        render_results_list(frame, results.list_area, state);
        let selected = if state.is_loading { None } else { state.records.get(state.results_idx) };
        render_preview(frame, results.preview_area, selected);
    }

    render_status_bar(frame, layout.status_area, state);

    if let Some(record) = state.detail {
        render_detail(frame, record, state.detail_scroll);
    }
    if let Some(palette) = state.palette {
        render_palette(frame, palette);
    }
}

fn header_text(state: &RenderState) -> (String, String) {
    match (state.category, state.query) {
        (Some(category), _) => (category.name.to_string(), category.description.to_string()),
        (None, Some(query)) => (
            format!("\"{}\"", query),
            format!("Deep forensic analysis of verifiable failures related to {}.", query),
        ),
        (None, None) => (
            "Why do promising startups fail?".to_string(),
            "Analyze the missed pivots that might have saved the $100B graveyard.".to_string(),
        ),
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (title, subtitle) = header_text(state);

    let text = Text::from(vec![
        Line::from(Span::styled(title, Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(subtitle, Style::default().fg(MUTED))),
    ]);

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(Span::styled(" Startup Sunsets ", Style::default().fg(WARM)))
            .title_bottom(" Ctrl+K: search | Home: home | Ctrl+C: quit "),
    );

    frame.render_widget(paragraph, area);
}

fn focus_border(focused: bool) -> Style {
    if focused { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
}

fn render_hero_input(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.landing_focus == LandingFocus::Input;
    let content = if state.hero_input.is_empty() && !focused {
        Line::from(Span::styled("Search a sector, e.g. Neobanks", Style::default().fg(MUTED)))
    } else {
        let cursor = if focused { "_" } else { "" };
        Line::from(format!("{}{}", state.hero_input, cursor))
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(focused))
            .title(" Search "),
    );

    frame.render_widget(paragraph, area);
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

fn render_landing_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.landing_focus == LandingFocus::Grid;

    let items: Vec<ListItem> = state
        .landing_items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let content = match item {
                LandingItem::Category(category) => {
                    format!("▣ {} | {} | {}", category.name, category.focus, category.description)
                }
                LandingItem::QuickTag(tag) => format!("# {}", tag),
            };
            ListItem::new(content).style(row_style(focused && idx == state.landing_idx))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(focused))
            .title(" Categories & Quick Searches "),
    );

    // The selection drives scrolling so the highlighted row stays visible
    let mut list_state = ListState::default().with_selected(Some(state.landing_idx));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_results_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(" Case Files ");

    if state.is_loading {
        let spinner = SPINNER[state.spinner_frame % SPINNER.len()];
        let mut items = vec![ListItem::new(format!("{} Investigating...", spinner))
            .style(Style::default().fg(WARM))];
        items.extend(
            (0..SKELETON_ROWS).map(|_| ListItem::new("░░░░░░░░░░░░ | ░░░░░░ | ░░░░░░░░░░░░░░░░░░")),
        );
        frame.render_widget(List::new(items).block(block), area);
        return;
    }

    if state.records.is_empty() {
        let paragraph = Paragraph::new("No case files").style(Style::default().fg(MUTED)).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let content = format!(
                "{} | {} | {} | {}",
                record.name,
                record.industry,
                record.lifespan(),
                record.lesson_learned
            );
            ListItem::new(content).style(row_style(idx == state.results_idx))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(state.results_idx));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(MUTED)),
        Span::raw(value.to_string()),
    ])
}

fn section(title: &str, body: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(title.to_string(), Style::default().fg(WARM).add_modifier(Modifier::BOLD))),
        Line::from(body.to_string()),
    ]
}

fn render_preview(frame: &mut Frame, area: Rect, record: Option<&CaseFile>) {
    let content = if let Some(record) = record {
        let mut lines = vec![
            Line::from(Span::styled(record.name.clone(), Style::default().add_modifier(Modifier::BOLD))),
            field_line("Founders", &record.founders),
            field_line("Lifespan", &record.lifespan()),
            field_line("Raised", &record.raised),
            Line::from(""),
            Line::from(record.description.clone()),
        ];
        lines.extend(section("Analogy", &record.analogy));
        Text::from(lines)
    } else {
        Text::from("No case file selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Preview "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_detail(frame: &mut Frame, record: &CaseFile, scroll: u16) {
    let area = centered_rect(80, 80, frame.area());

    let mut lines = vec![
        field_line("Industry", &record.industry),
        field_line("Founded by", &record.founders),
        field_line("Lifespan", &record.lifespan()),
        field_line("Raised", &record.raised),
        field_line("Cause of death", &record.lesson_learned),
    ];
    if let Some(focus) = &record.focus_area {
        lines.push(field_line("Focus", focus));
    }
    lines.push(field_line("Source", &record.source_url));
    lines.extend(section("The Story", &record.description));
    lines.extend(section("The Analogy", &record.analogy));
    lines.extend(section("The Mental Model", &record.mental_model));
    lines.extend(section("The Pivot", &record.pivot_strategy));
    lines.extend(section("The \"What If\" Scenario", &record.what_if));

    // Keep at least the last wrapped row on screen
    let inner_width = usize::from(area.width.saturating_sub(2)).max(1);
    let rows: usize = lines.iter().map(|line| line.width().div_ceil(inner_width).max(1)).sum();
    let max_scroll = u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(format!(" {} ", record.name))
                .title_bottom(" ↑/↓: scroll | Esc: close | Ctrl+Y: copy source "),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_palette(frame: &mut Frame, palette: &SearchPalette) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Search ")
        .title_bottom(" Enter: search | Esc: close ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let input_area = Rect { height: 1, ..inner };
    let list_area = Rect { y: inner.y + 1, height: inner.height - 1, ..inner };

    let input = Paragraph::new(format!("> {}_", palette.input())).style(Style::default().fg(BRIGHT));
    frame.render_widget(input, input_area);

    let items: Vec<ListItem> = palette
        .entries()
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| ListItem::new(entry.to_string()).style(row_style(idx == palette.selected())))
        .collect();
    frame.render_widget(List::new(items), list_area);
}

fn status_text(state: &RenderState) -> (String, Style) {
    let normal = Style::default().fg(BRIGHT).bg(SURFACE);

    if let Some(msg) = state.status_message {
        let fg = match msg.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        return (format!(" {} ", msg.text), Style::default().fg(fg).bg(SURFACE));
    }

    if state.screen == Screen::Landing {
        return (" Tab: switch focus | Enter: open | Esc: clear/quit ".to_string(), normal);
    }

    if state.is_loading {
        return (" Investigating... | Home: cancel | Ctrl+C: quit ".to_string(), normal);
    }

    match state.last_status {
        Some(FetchStatus::Failed(reason)) => (
            format!(" [ERROR] Retrieval failed: {} | Ctrl+R: retry ", reason),
            Style::default().fg(ERROR).bg(SURFACE),
        ),
        Some(FetchStatus::Found { count, fetched_at }) => {
            let parts = [
                format!("{} case files", count),
                format!("fetched {}", format_fetch_age(fetched_at, &Utc::now())),
                format!("case {}/{}", state.results_idx + 1, count),
                "Enter: open".to_string(),
                "Ctrl+Y: copy source".to_string(),
                "Ctrl+R: refresh".to_string(),
                "Esc: home".to_string(),
            ];
            (format!(" {} ", parts.join(" | ")), normal)
        }
        Some(FetchStatus::Empty) | None => {
            (" No case files | Ctrl+R: refresh | Esc: home ".to_string(), normal)
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text, style) = status_text(state);
    frame.render_widget(Paragraph::new(text).style(style), area);
}
