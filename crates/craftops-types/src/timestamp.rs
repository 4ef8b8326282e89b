use chrono::NaiveDateTime;

/// Timestamp format used by the server's bracketed log prefix,
/// e.g. `01Jan2024 10:00:00`.
pub const LOG_TIMESTAMP_FORMAT: &str = "%d%b%Y %H:%M:%S";

/// Parse a timestamp in the log's native textual format.
pub fn parse_log_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, LOG_TIMESTAMP_FORMAT).ok()
}

/// Extract the timestamp from a log line's bracketed prefix.
///
/// A line looks like `[01Jan2024 10:00:00.123] Alice joined the game`; the
/// fractional-second part is optional and dropped. Returns the timestamp in
/// its original textual form, validated against [`LOG_TIMESTAMP_FORMAT`].
/// Lines without a valid prefix yield `None`.
pub fn extract_log_timestamp(line: &str) -> Option<String> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    let stamp = &rest[..end];
    let stamp = match stamp.split_once('.') {
        Some((whole, _fraction)) => whole,
        None => stamp,
    };
    parse_log_timestamp(stamp)?;
    Some(stamp.to_string())
}
