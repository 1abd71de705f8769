pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod present;
pub mod prompt;
pub mod request;
pub mod save;
pub mod session;
