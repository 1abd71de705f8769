//! CLI command handlers.

mod config_path;
mod session;

pub use config_path::run_config_path;
pub use session::run_session;
