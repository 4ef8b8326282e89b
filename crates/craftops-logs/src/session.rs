use crate::scanner::LogScanner;
use craftops_remote::Executor;
use craftops_types::{ErrorNode, extract_log_timestamp};
use futures::future::join_all;

/// Outcome of a last-session query for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastSession {
    /// No join event anywhere in the logs.
    NoData,
    /// The most recent session, bracketed by its join event.
    Session {
        /// Join timestamp in the log's native textual format.
        joined_at: String,
        departure: Departure,
    },
}

/// How the most recent session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departure {
    /// Leave timestamp in the log's native textual format.
    LeftAt(String),
    /// No leave event newer than the join: the player is still on.
    StillPlaying,
    /// The leave lookup failed after the join was already found; the join
    /// timestamp is preserved alongside the failure.
    Failed(Box<ErrorNode>),
}

/// Answers "when did this player last join and leave" from the server logs.
pub struct SessionTracker<'a, E> {
    scanner: &'a LogScanner<'a, E>,
}

impl<'a, E: Executor> SessionTracker<'a, E> {
    pub fn new(scanner: &'a LogScanner<'a, E>) -> Self {
        Self { scanner }
    }

    /// Locate the two events bracketing the player's most recent session.
    ///
    /// The join event is searched with no budget; the leave event is then
    /// searched no further back than the lines it took to find the join,
    /// so a leave from an older session can never be misreported as
    /// belonging to the current one.
    pub async fn last_session(&self, username: &str) -> Result<LastSession, ErrorNode> {
        let joined_pattern = format!("{username} joined the game");
        let joined = self
            .scanner
            .search(&joined_pattern, Some(1), None)
            .await
            .map_err(|e| e.wrap("last_session", "error searching for join event"))?;
        let Some(join_line) = joined.lines.first() else {
            return Ok(LastSession::NoData);
        };
        let joined_at = extract_log_timestamp(join_line).ok_or_else(|| {
            ErrorNode::leaf(
                "last_session",
                "join line has no parsable timestamp",
                join_line.clone(),
            )
        })?;

        let left_pattern = format!("{username} left the game");
        let departure = match self
            .scanner
            .search(&left_pattern, Some(1), Some(joined.lines_scanned))
            .await
        {
            Err(e) => Departure::Failed(Box::new(
                e.wrap("last_session", "error searching for leave event"),
            )),
            Ok(left) => match left.lines.first() {
                None => Departure::StillPlaying,
                Some(leave_line) => match extract_log_timestamp(leave_line) {
                    Some(left_at) => Departure::LeftAt(left_at),
                    None => Departure::Failed(Box::new(ErrorNode::leaf(
                        "last_session",
                        "leave line has no parsable timestamp",
                        leave_line.clone(),
                    ))),
                },
            },
        };

        Ok(LastSession::Session {
            joined_at,
            departure,
        })
    }
}

/// Fan-out batch: concurrent last-session lookups sharing one cache scope.
///
/// The scanner's cache is cleared immediately before and after the batch, so
/// the lookups amortize each other's remote reads without leaking state into
/// unrelated later queries. Results come back in input order.
pub async fn last_sessions<E: Executor>(
    scanner: &LogScanner<'_, E>,
    usernames: &[String],
) -> Vec<(String, Result<LastSession, ErrorNode>)> {
    scanner.cache().clear();
    let results = {
        let tracker = SessionTracker::new(scanner);
        join_all(usernames.iter().map(|name| tracker.last_session(name))).await
    };
    scanner.cache().clear();
    usernames.iter().cloned().zip(results).collect()
}
