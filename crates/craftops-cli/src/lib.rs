//! Command layer of the craftops console.
//!
//! Each subcommand maps to one handler; handlers check authorization first,
//! call into the runtime services, and format results for the operator.
//! Expected failures render as a short message while the full error tree
//! goes to the operational log.

mod args;
mod commands;
mod handlers;
mod output;

pub use args::{Cli, Commands};
pub use commands::run;
