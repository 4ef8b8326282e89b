//! Log intelligence for the managed server.
//!
//! [`LogScanner`] lists and reads the remote log directory (plain or
//! gzip-compressed files) and performs bounded substring search across the
//! ordered file set, most recent line first. [`SessionTracker`] sits on top
//! and answers "when did this player last join and leave".
//!
//! All reads go through an explicit [`LogCache`] owned by the caller of a
//! query session: lookups within one fan-out batch amortize each other's
//! remote reads, and nothing leaks into later queries.

mod cache;
mod scanner;
mod session;

pub use cache::LogCache;
pub use scanner::{LogFileHandle, LogScanner, SearchOutcome, SortOrder};
pub use session::{Departure, LastSession, SessionTracker, last_sessions};
