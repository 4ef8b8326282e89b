use crate::scanner::{LogFileHandle, SortOrder};
use std::collections::HashMap;
use std::sync::Mutex;

/// Session-scoped cache of remote listings and decoded file contents.
///
/// Owned by the caller of a logical query session and passed into the
/// scanner, so cache lifetime is an explicit parameter rather than hidden
/// process-global state. Locks are only held for map access, never across
/// an await, which is all the synchronization a fan-out batch needs.
#[derive(Debug, Default)]
pub struct LogCache {
    listings: Mutex<HashMap<SortOrder, Vec<LogFileHandle>>>,
    contents: Mutex<HashMap<String, String>>,
}

impl LogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything. Called at the boundaries of a fan-out batch.
    pub fn clear(&self) {
        self.listings.lock().unwrap().clear();
        self.contents.lock().unwrap().clear();
    }

    pub(crate) fn listing(&self, order: SortOrder) -> Option<Vec<LogFileHandle>> {
        self.listings.lock().unwrap().get(&order).cloned()
    }

    pub(crate) fn store_listing(&self, order: SortOrder, handles: Vec<LogFileHandle>) {
        self.listings.lock().unwrap().insert(order, handles);
    }

    pub(crate) fn content(&self, path: &str) -> Option<String> {
        self.contents.lock().unwrap().get(path).cloned()
    }

    pub(crate) fn store_content(&self, path: &str, text: String) {
        self.contents.lock().unwrap().insert(path.to_string(), text);
    }
}
