//! Testing infrastructure for craftops integration tests.
//!
//! - [`MockExecutor`]: canned remote transport, no ssh required
//! - [`fixtures`]: server-log line and listing builders

pub mod fixtures;
pub mod mock;

pub use mock::MockExecutor;
