//! Observability module for the VsesvitAI client.
//!
//! The client emits `tracing` events and spans; nothing is printed unless
//! the application installs a subscriber, for example with [`init_logging`].

mod logging;

pub use logging::{init_logging, redact, LogConfig, LogFormat, LogLevel};
