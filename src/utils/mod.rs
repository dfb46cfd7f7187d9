pub mod environment;
pub mod terminal;

pub use environment::{default_log_path, get_api_key};
pub use terminal::sanitize_generated_text;
