//! View-state controller: the single owner of what the interface shows.
//!
//! Intents change state synchronously and may hand back a [`Ticket`] naming a
//! retrieval to run. The [`RetrievalDispatcher`] runs it off the UI thread and
//! feeds the outcome back through [`Controller::complete`], which only lets the
//! most recently issued ticket land.

pub mod dispatch;
pub mod state;

pub use dispatch::{Completion, RetrievalDispatcher};
pub use state::{Controller, FetchStatus, Screen, Ticket, Trigger};
