//! Player registry: the canonical username/uuid mapping and per-player
//! statistics, ingested from the managed host and persisted locally.

mod registry;
mod store;

pub use registry::PlayerRegistry;
pub use store::PlayerStore;
