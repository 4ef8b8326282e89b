use std::io;
use std::process::Stdio;
use tokio::process::Command;

/// Captured result of one remote command invocation.
///
/// A non-zero status is a normal, representable outcome, not a fault:
/// transport-level failures (connection refused, auth, timeout) and remote
/// command failures both surface here uniformly, distinguishable only by
/// their stderr text. This layer reports causes, it does not classify them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Something that can run a command line against the managed host.
///
/// The production implementation is [`SshExecutor`]; tests substitute a mock
/// with canned outputs. Calls are independent and may run concurrently.
#[allow(async_fn_in_trait)]
pub trait Executor: Send + Sync {
    async fn execute(&self, command_line: &str) -> io::Result<ExecOutput>;
}

/// Runs commands on the managed host over ssh.
#[derive(Debug, Clone)]
pub struct SshExecutor {
    user: String,
    host: String,
    port: u16,
}

impl SshExecutor {
    pub fn new(user: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            port,
        }
    }

    /// Full shell command line for one remote invocation.
    ///
    /// `-v` is always on so a connection failure leaves a usable trace in
    /// the captured stderr.
    pub fn command_line(&self, command: &str) -> String {
        format!(
            "ssh {}@{} -p {} -v {}",
            self.user, self.host, self.port, command
        )
    }
}

impl Executor for SshExecutor {
    async fn execute(&self, command_line: &str) -> io::Result<ExecOutput> {
        let full = self.command_line(command_line);
        tracing::debug!(command = %command_line, "remote exec");
        run_shell(&full).await
    }
}

/// Run a command line through the shell, capturing everything.
///
/// `Err` is reserved for a local spawn failure; anything the child process
/// does, including exiting non-zero, comes back as an [`ExecOutput`].
async fn run_shell(command_line: &str) -> io::Result<ExecOutput> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command_line)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    Ok(ExecOutput {
        // Signal-terminated children have no code; report them as -1.
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_has_fixed_shape() {
        let ssh = SshExecutor::new("mc", "example.org", 2222);
        assert_eq!(
            ssh.command_line("cat minecraft_server/usernamecache.json"),
            "ssh mc@example.org -p 2222 -v cat minecraft_server/usernamecache.json"
        );
    }

    #[tokio::test]
    async fn run_shell_captures_streams_and_status() {
        let out = run_shell("printf hello; printf oops >&2; exit 3")
            .await
            .unwrap();
        assert_eq!(out.status, 3);
        assert_eq!(out.stdout, "hello");
        assert_eq!(out.stderr, "oops");
        assert!(!out.success());
    }

    #[tokio::test]
    async fn run_shell_zero_exit_is_success() {
        let out = run_shell("true").await.unwrap();
        assert!(out.success());
        assert!(out.stdout.is_empty());
    }
}
