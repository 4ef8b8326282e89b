pub mod console;
pub mod daemon;
pub mod last_seen;
pub mod ops;
pub mod players;
pub mod playtime;
pub mod refresh;
