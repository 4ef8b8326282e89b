use crate::cache::LogCache;
use craftops_remote::Executor;
use craftops_types::ErrorNode;

/// One file in the remote log directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileHandle {
    pub path: String,
    pub compressed: bool,
}

impl LogFileHandle {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let compressed = path.ends_with(".gz");
        Self { path, compressed }
    }
}

/// Listing order for the remote log directory.
///
/// Only [`SortOrder::ByDate`] (newest first) is meaningful for
/// "most recent event" queries; sorting is delegated to the remote `ls`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    ByName,
    ByDate,
}

/// Result of a bounded log search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Matching lines, most recent first.
    pub lines: Vec<String>,
    /// Total lines examined, matched or not.
    pub lines_scanned: usize,
}

/// Lists, reads and searches the remote log directory through one
/// [`Executor`], caching everything in the caller-supplied [`LogCache`].
pub struct LogScanner<'a, E> {
    executor: &'a E,
    logs_dir: String,
    cache: &'a LogCache,
}

impl<'a, E: Executor> LogScanner<'a, E> {
    pub fn new(executor: &'a E, logs_dir: impl Into<String>, cache: &'a LogCache) -> Self {
        Self {
            executor,
            logs_dir: logs_dir.into(),
            cache,
        }
    }

    pub fn cache(&self) -> &LogCache {
        self.cache
    }

    /// List the log files, excluding debug logs, in the requested order.
    pub async fn list_files(&self, order: SortOrder) -> Result<Vec<LogFileHandle>, ErrorNode> {
        if let Some(cached) = self.cache.listing(order) {
            return Ok(cached);
        }

        let command = match order {
            SortOrder::ByDate => format!("ls -t {}/*.log* | grep -v debug", self.logs_dir),
            SortOrder::ByName => format!("ls {}/*.log* | grep -v debug", self.logs_dir),
        };
        let output = self
            .executor
            .execute(&command)
            .await
            .map_err(|e| ErrorNode::leaf("list_files", "failed to invoke remote transport", e.to_string()))?;
        if !output.success() {
            return Err(ErrorNode::leaf(
                "list_files",
                "remote listing of log files failed",
                output.stderr,
            ));
        }

        let handles: Vec<LogFileHandle> = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(LogFileHandle::new)
            .collect();
        self.cache.store_listing(order, handles.clone());
        Ok(handles)
    }

    /// Read one log file, decompressing remotely when needed.
    pub async fn read_file(&self, handle: &LogFileHandle) -> Result<String, ErrorNode> {
        if let Some(cached) = self.cache.content(&handle.path) {
            return Ok(cached);
        }

        let command = if handle.compressed {
            format!("zcat {}", handle.path)
        } else {
            format!("cat {}", handle.path)
        };
        let output = self
            .executor
            .execute(&command)
            .await
            .map_err(|e| ErrorNode::leaf("read_file", "failed to invoke remote transport", e.to_string()))?;
        if !output.success() {
            return Err(ErrorNode::leaf(
                "read_file",
                format!("remote read of {} failed", handle.path),
                output.stderr,
            ));
        }

        self.cache.store_content(&handle.path, output.stdout.clone());
        Ok(output.stdout)
    }

    /// Substring search across the whole file set, most recent line first.
    ///
    /// Files are visited in date order and each file is scanned from its
    /// last line backwards, so matches accumulate newest-first. The scan
    /// stops as soon as `match_limit` matches are collected or `line_budget`
    /// lines have been examined; `None` means unbounded. A listing or read
    /// failure aborts the whole search — a partial scan cannot be ordered
    /// correctly against the files that were never read.
    pub async fn search(
        &self,
        needle: &str,
        match_limit: Option<usize>,
        line_budget: Option<usize>,
    ) -> Result<SearchOutcome, ErrorNode> {
        let files = self
            .list_files(SortOrder::ByDate)
            .await
            .map_err(|e| e.wrap("search", "failed to list log files"))?;

        let mut matched: Vec<String> = Vec::new();
        let mut scanned = 0usize;
        let done = |matched: &Vec<String>, scanned: usize| {
            match_limit.is_some_and(|k| matched.len() >= k)
                || line_budget.is_some_and(|budget| scanned >= budget)
        };

        'files: for file in &files {
            if done(&matched, scanned) {
                break;
            }
            let text = self
                .read_file(file)
                .await
                .map_err(|e| e.wrap("search", "failed to read log file"))?;
            for line in text.lines().rev() {
                scanned += 1;
                if line.contains(needle) {
                    matched.push(line.to_string());
                }
                if done(&matched, scanned) {
                    break 'files;
                }
            }
        }

        tracing::debug!(needle, matches = matched.len(), scanned, "log search");
        Ok(SearchOutcome {
            lines: matched,
            lines_scanned: scanned,
        })
    }
}
