use anyhow::{Context, Result};
use arboard::Clipboard;

use crate::models::CaseFile;

/// Longest source reference accepted for copying
const MAX_SOURCE_URL_LEN: usize = 8 * 1024;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Checks that a record carries a copyable source reference and returns it.
///
/// Only the shape is checked; whether the link resolves is never verified.
fn source_url_of(record: &CaseFile) -> Result<&str> {
    let url = record.source_url.trim();

    if url.is_empty() {
        anyhow::bail!("{} has no source link", record.name);
    }
    if url.len() > MAX_SOURCE_URL_LEN {
        anyhow::bail!("Source link too long ({} bytes, max {})", url.len(), MAX_SOURCE_URL_LEN);
    }
    if url.chars().any(char::is_whitespace) {
        anyhow::bail!("Source link for {} is not a URL", record.name);
    }

    Ok(url)
}

fn copy_with_provider(record: &CaseFile, provider: &mut dyn ClipboardProvider) -> Result<String> {
    let url = source_url_of(record)?;
    provider.set_text(url)?;
    Ok(url.to_string())
}

/// Copy a record's source link to the system clipboard, returning what was copied.
///
/// # Errors
/// Returns error if:
/// - The record's source link is empty, oversized or contains whitespace
/// - Clipboard is locked by another process or unavailable (headless sessions)
pub fn copy_source_url(record: &CaseFile) -> Result<String> {
    // Validate before touching the system clipboard
    source_url_of(record)?;

    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(record, &mut clipboard)
}
