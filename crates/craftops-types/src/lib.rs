pub mod duration;
pub mod error;
pub mod player;
pub mod timestamp;

pub use duration::{format_playtime, humanize_seconds, time_since};
pub use error::{Detail, ErrorNode};
pub use player::{PlayerIdentity, PlayerRecord, PlayerStats, RegistryFile, TICKS_PER_SECOND};
pub use timestamp::{LOG_TIMESTAMP_FORMAT, extract_log_timestamp, parse_log_timestamp};
