// TUI module for browsing case files
mod app;
mod events;
mod landing;
mod layout;
mod palette;
mod rendering;
mod terminal;
mod timestamps;

use std::sync::Arc;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::retrieval::RetrievalService;

/// Longest accepted search input, in characters
pub(crate) const MAX_INPUT_LEN: usize = 256;

/// Run the interactive TUI
pub fn run_interactive(service: Arc<RetrievalService>) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(service);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
