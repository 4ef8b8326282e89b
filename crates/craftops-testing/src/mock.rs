use craftops_remote::{ExecOutput, Executor};
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

/// Canned remote transport: maps exact command lines to outputs and records
/// every call for assertions.
///
/// Unregistered commands come back as exit 127 with a diagnostic on stderr,
/// which downstream code treats like any other remote failure.
#[derive(Debug, Default)]
pub struct MockExecutor {
    responses: HashMap<String, ExecOutput>,
    calls: Mutex<Vec<String>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a full [`ExecOutput`] for an exact command line.
    pub fn on(mut self, command: &str, output: ExecOutput) -> Self {
        self.responses.insert(command.to_string(), output);
        self
    }

    /// Register a successful command producing `stdout`.
    pub fn on_success(self, command: &str, stdout: &str) -> Self {
        self.on(
            command,
            ExecOutput {
                status: 0,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        )
    }

    /// Register a failing command producing `stderr` with exit 255
    /// (ssh's own exit code for transport failures).
    pub fn on_failure(self, command: &str, stderr: &str) -> Self {
        self.on(
            command,
            ExecOutput {
                status: 255,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        )
    }

    /// Every command line executed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times `command` was executed.
    pub fn call_count(&self, command: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == command)
            .count()
    }
}

impl Executor for MockExecutor {
    async fn execute(&self, command_line: &str) -> io::Result<ExecOutput> {
        self.calls.lock().unwrap().push(command_line.to_string());
        match self.responses.get(command_line) {
            Some(output) => Ok(output.clone()),
            None => Ok(ExecOutput {
                status: 127,
                stdout: String::new(),
                stderr: format!("mock: no response registered for `{command_line}`"),
            }),
        }
    }
}
