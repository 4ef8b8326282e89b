//! Builders for server-log fixture data.

/// A join event line in the server's log format.
pub fn join_line(timestamp: &str, username: &str) -> String {
    format!("[{timestamp}] [Server thread/INFO]: {username} joined the game")
}

/// A leave event line in the server's log format.
pub fn leave_line(timestamp: &str, username: &str) -> String {
    format!("[{timestamp}] [Server thread/INFO]: {username} left the game")
}

/// An unrelated chatter line, for padding scans.
pub fn noise_line(timestamp: &str, text: &str) -> String {
    format!("[{timestamp}] [Server thread/INFO]: {text}")
}

/// Join lines into one log-file body as the remote `cat` would produce it.
pub fn log_body(lines: &[String]) -> String {
    let mut body = lines.join("\n");
    body.push('\n');
    body
}

/// A remote `ls` listing: one path per line, trailing newline included.
pub fn listing(paths: &[&str]) -> String {
    let mut text = paths.join("\n");
    text.push('\n');
    text
}
