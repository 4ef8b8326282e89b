use craftops_logs::{Departure, LastSession, LogCache, LogScanner, SessionTracker, last_sessions};
use craftops_testing::MockExecutor;
use craftops_testing::fixtures::{join_line, leave_line, listing, log_body, noise_line};
use craftops_types::{humanize_seconds, parse_log_timestamp};

const LIST_BY_DATE: &str = "ls -t logs/*.log* | grep -v debug";

#[tokio::test]
async fn complete_session_returns_both_timestamps() {
    let mock = MockExecutor::new()
        .on_success(LIST_BY_DATE, &listing(&["logs/latest.log"]))
        .on_success(
            "cat logs/latest.log",
            "[01Jan2024 10:00:00] Alice joined the game\n\
             [01Jan2024 11:30:00] Alice left the game\n",
        );
    let cache = LogCache::new();
    let scanner = LogScanner::new(&mock, "logs", &cache);
    let tracker = SessionTracker::new(&scanner);

    let session = tracker.last_session("Alice").await.unwrap();
    let LastSession::Session {
        joined_at,
        departure,
    } = session
    else {
        panic!("expected a session, got {session:?}");
    };
    assert_eq!(joined_at, "01Jan2024 10:00:00");
    assert_eq!(departure, Departure::LeftAt("01Jan2024 11:30:00".to_string()));

    // The caller derives the elapsed duration from the two timestamps.
    let joined = parse_log_timestamp(&joined_at).unwrap();
    let left = parse_log_timestamp("01Jan2024 11:30:00").unwrap();
    assert_eq!(humanize_seconds((left - joined).num_seconds()), "1 hour");
}

#[tokio::test]
async fn unknown_player_yields_no_data() {
    let mock = MockExecutor::new()
        .on_success(LIST_BY_DATE, &listing(&["logs/latest.log"]))
        .on_success(
            "cat logs/latest.log",
            &log_body(&[join_line("01Jan2024 10:00:00", "Alice")]),
        );
    let cache = LogCache::new();
    let scanner = LogScanner::new(&mock, "logs", &cache);
    let tracker = SessionTracker::new(&scanner);

    assert_eq!(
        tracker.last_session("Bob").await.unwrap(),
        LastSession::NoData
    );
}

#[tokio::test]
async fn join_without_leave_is_still_playing() {
    let mock = MockExecutor::new()
        .on_success(LIST_BY_DATE, &listing(&["logs/latest.log"]))
        .on_success(
            "cat logs/latest.log",
            &log_body(&[
                noise_line("02Feb2024 20:00:00", "Preparing spawn area"),
                join_line("02Feb2024 20:01:12", "Alice"),
            ]),
        );
    let cache = LogCache::new();
    let scanner = LogScanner::new(&mock, "logs", &cache);
    let tracker = SessionTracker::new(&scanner);

    let session = tracker.last_session("Alice").await.unwrap();
    assert_eq!(
        session,
        LastSession::Session {
            joined_at: "02Feb2024 20:01:12".to_string(),
            departure: Departure::StillPlaying,
        }
    );
}

#[tokio::test]
async fn leave_from_a_previous_session_is_not_misreported() {
    // The leave search is budgeted to the lines it took to find the join,
    // so the 09:00 leave (older than the 10:00 join) must not be returned.
    let mock = MockExecutor::new()
        .on_success(LIST_BY_DATE, &listing(&["logs/latest.log"]))
        .on_success(
            "cat logs/latest.log",
            &log_body(&[
                join_line("01Jan2024 08:00:00", "Alice"),
                leave_line("01Jan2024 09:00:00", "Alice"),
                join_line("01Jan2024 10:00:00", "Alice"),
            ]),
        );
    let cache = LogCache::new();
    let scanner = LogScanner::new(&mock, "logs", &cache);
    let tracker = SessionTracker::new(&scanner);

    let session = tracker.last_session("Alice").await.unwrap();
    assert_eq!(
        session,
        LastSession::Session {
            joined_at: "01Jan2024 10:00:00".to_string(),
            departure: Departure::StillPlaying,
        }
    );
}

#[tokio::test]
async fn session_spanning_rotated_files_is_resolved() {
    // Join sits in the gzipped previous file; the leave search budget covers
    // everything up to and including that join line.
    let mock = MockExecutor::new()
        .on_success(
            LIST_BY_DATE,
            &listing(&["logs/latest.log", "logs/2024-03-01-1.log.gz"]),
        )
        .on_success(
            "cat logs/latest.log",
            &log_body(&[
                leave_line("01Mar2024 23:50:00", "Alice"),
                noise_line("02Mar2024 00:10:00", "Saving chunks"),
            ]),
        )
        .on_success(
            "zcat logs/2024-03-01-1.log.gz",
            &log_body(&[join_line("01Mar2024 22:00:00", "Alice")]),
        );
    let cache = LogCache::new();
    let scanner = LogScanner::new(&mock, "logs", &cache);
    let tracker = SessionTracker::new(&scanner);

    let session = tracker.last_session("Alice").await.unwrap();
    assert_eq!(
        session,
        LastSession::Session {
            joined_at: "01Mar2024 22:00:00".to_string(),
            departure: Departure::LeftAt("01Mar2024 23:50:00".to_string()),
        }
    );
}

#[tokio::test]
async fn transport_failure_surfaces_as_an_error_tree() {
    let mock = MockExecutor::new()
        .on_failure(LIST_BY_DATE, "ssh: Could not resolve hostname mc: Name or service not known");
    let cache = LogCache::new();
    let scanner = LogScanner::new(&mock, "logs", &cache);
    let tracker = SessionTracker::new(&scanner);

    let err = tracker.last_session("Alice").await.unwrap_err();
    let rendered = err.render();
    assert_eq!(err.origin(), "last_session");
    assert!(rendered.contains("search: \"failed to list log files\""));
    assert!(rendered.contains("Could not resolve hostname"));
}

#[tokio::test]
async fn fan_out_shares_one_cache_and_clears_it_afterwards() {
    let mock = MockExecutor::new()
        .on_success(LIST_BY_DATE, &listing(&["logs/latest.log"]))
        .on_success(
            "cat logs/latest.log",
            &log_body(&[
                join_line("05May2024 18:00:00", "Alice"),
                join_line("05May2024 18:05:00", "Bob"),
                leave_line("05May2024 19:00:00", "Bob"),
            ]),
        );
    let cache = LogCache::new();
    let scanner = LogScanner::new(&mock, "logs", &cache);

    let names = vec!["Alice".to_string(), "Bob".to_string()];
    let results = last_sessions(&scanner, &names).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, "Alice");
    assert!(matches!(
        results[0].1.as_ref().unwrap(),
        LastSession::Session {
            departure: Departure::StillPlaying,
            ..
        }
    ));
    assert!(matches!(
        results[1].1.as_ref().unwrap(),
        LastSession::Session {
            departure: Departure::LeftAt(_),
            ..
        }
    ));

    // Both lookups shared one listing and one file read.
    assert_eq!(mock.call_count(LIST_BY_DATE), 1);
    assert_eq!(mock.call_count("cat logs/latest.log"), 1);

    // The batch cache was cleared on the way out: a later query re-reads.
    let tracker = SessionTracker::new(&scanner);
    tracker.last_session("Alice").await.unwrap();
    assert_eq!(mock.call_count(LIST_BY_DATE), 2);
}
