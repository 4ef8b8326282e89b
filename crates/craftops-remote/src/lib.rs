//! Remote command transport for the managed server.
//!
//! Every remote interaction is one fresh `ssh` round-trip: build a command
//! line, run it through the shell, capture stdout/stderr/exit status. There
//! is no session reuse, no retry and no cancellation; a dispatched command
//! runs to completion or transport failure.

mod exec;
mod json;

pub use exec::{ExecOutput, Executor, SshExecutor};
pub use json::extract_json_objects;
