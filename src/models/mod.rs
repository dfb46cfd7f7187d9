//! Data models for the failed-startup archive.
//!
//! - [`CaseFile`] - One generated record describing a failed organization
//! - [`CategoryDescriptor`] - One browsable industry grouping with its focus lens
//!
//! Records arrive from the generator as camelCase JSON and are immutable once
//! normalized; a whole batch is replaced at a time, never edited in place.

pub mod case_file;
pub mod category;

pub use case_file::CaseFile;
pub use category::CategoryDescriptor;
