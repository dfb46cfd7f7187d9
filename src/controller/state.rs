use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{CaseFile, CategoryDescriptor};
use crate::retrieval::FetchOutcome;

/// Top-level screen, derived from the selected category and active query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    CategoryResults,
    SearchResults,
}

/// The state change a retrieval was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Category(CategoryDescriptor),
    Query(String),
}

/// Handle for one issued retrieval.
///
/// `seq` increases with every issued ticket, so two tickets for the same
/// category are still told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    trigger: Trigger,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }
}

/// Summary of the last applied retrieval, for the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Found { count: usize, fetched_at: DateTime<Utc> },
    Empty,
    Failed(String),
}

impl FetchStatus {
    fn of(outcome: &FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Found(batch) => {
                FetchStatus::Found { count: batch.records.len(), fetched_at: batch.fetched_at }
            }
            FetchOutcome::Empty => FetchStatus::Empty,
            FetchOutcome::Failed(reason) => FetchStatus::Failed(reason.clone()),
        }
    }
}

#[derive(Debug, Default)]
pub struct Controller {
    selected_category: Option<CategoryDescriptor>,
    active_query: Option<String>,
    records: Vec<CaseFile>,
    is_loading: bool,
    detail: Option<CaseFile>,
    last_status: Option<FetchStatus>,
    issued: u64,
    in_flight: Option<u64>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> Option<&CategoryDescriptor> {
        self.selected_category.as_ref()
    }

    pub fn active_query(&self) -> Option<&str> {
        self.active_query.as_deref()
    }

    pub fn records(&self) -> &[CaseFile] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn detail(&self) -> Option<&CaseFile> {
        self.detail.as_ref()
    }

    pub fn last_status(&self) -> Option<&FetchStatus> {
        self.last_status.as_ref()
    }

    /// Results mode is on iff a category or a query is selected
    pub fn is_results_mode(&self) -> bool {
        self.selected_category.is_some() || self.active_query.is_some()
    }

    pub fn screen(&self) -> Screen {
        match (&self.selected_category, &self.active_query) {
            (Some(_), _) => Screen::CategoryResults,
            (None, Some(_)) => Screen::SearchResults,
            (None, None) => Screen::Landing,
        }
    }

    pub fn select_category(&mut self, category: CategoryDescriptor) -> Ticket {
        self.selected_category = Some(category);
        self.active_query = None;
        self.issue(Trigger::Category(category))
    }

    /// Start a search. Blank or whitespace-only input is ignored.
    pub fn submit_search(&mut self, query: &str) -> Option<Ticket> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.active_query = Some(query.to_string());
        self.selected_category = None;
        Some(self.issue(Trigger::Query(query.to_string())))
    }

    /// Re-run the retrieval for the current screen; `None` on the landing screen
    pub fn refresh(&mut self) -> Option<Ticket> {
        let trigger = self.current_trigger()?;
        Some(self.issue(trigger))
    }

    /// Back to the landing screen. Any in-flight retrieval is orphaned and its
    /// result will be dropped. The detail overlay is left alone.
    pub fn go_home(&mut self) {
        self.selected_category = None;
        self.active_query = None;
        self.records.clear();
        self.is_loading = false;
        self.in_flight = None;
        self.last_status = None;
    }

    pub fn open_detail(&mut self, record: CaseFile) {
        self.detail = Some(record);
    }

    /// Open the detail overlay for the record at `index`; false if out of range
    pub fn open_detail_at(&mut self, index: usize) -> bool {
        match self.records.get(index) {
            Some(record) => {
                self.detail = Some(record.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Apply a finished retrieval. Returns false, leaving state untouched, when
    /// the ticket has been superseded or no longer matches the current screen.
    pub fn complete(&mut self, ticket: &Ticket, outcome: FetchOutcome) -> bool {
        if self.in_flight != Some(ticket.seq) {
            debug!(seq = ticket.seq, latest = ?self.in_flight, "dropping superseded retrieval");
            return false;
        }
        if self.current_trigger().as_ref() != Some(&ticket.trigger) {
            debug!(seq = ticket.seq, "dropping retrieval for a screen no longer shown");
            return false;
        }

        self.in_flight = None;
        self.is_loading = false;
        self.last_status = Some(FetchStatus::of(&outcome));
        self.records = outcome.into_records();
        true
    }

    fn current_trigger(&self) -> Option<Trigger> {
        match (&self.selected_category, &self.active_query) {
            (Some(category), _) => Some(Trigger::Category(*category)),
            (None, Some(query)) => Some(Trigger::Query(query.clone())),
            (None, None) => None,
        }
    }

    fn issue(&mut self, trigger: Trigger) -> Ticket {
        self.issued += 1;
        self.in_flight = Some(self.issued);
        self.is_loading = true;
        self.last_status = None;
        Ticket { seq: self.issued, trigger }
    }
}
