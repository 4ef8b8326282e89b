//! Runtime services for the craftops console: startup configuration,
//! operator authorization, remote console commands and the daily refresh
//! schedule. Services are plain constructed objects handed to the command
//! layer; there are no process-wide singletons.

pub mod auth;
pub mod config;
mod console;
mod error;
mod schedule;

pub use auth::{AuthService, Authorization, Capability};
pub use config::Config;
pub use console::ConsoleService;
pub use error::{Error, Result};
pub use schedule::DailyRefresh;
