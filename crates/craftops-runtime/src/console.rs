use craftops_remote::Executor;
use craftops_types::ErrorNode;

/// Runs the admin scripts that live on the managed host, including the one
/// that feeds commands into the game server's console.
pub struct ConsoleService<'a, E> {
    executor: &'a E,
    scripts_dir: String,
}

impl<'a, E: Executor> ConsoleService<'a, E> {
    pub fn new(executor: &'a E, scripts_dir: impl Into<String>) -> Self {
        Self {
            executor,
            scripts_dir: scripts_dir.into(),
        }
    }

    /// Run one of the admin scripts with the given arguments.
    pub async fn run_script(&self, script: &str, args: &[String]) -> Result<(), ErrorNode> {
        let mut command = format!("bash {}/{script}", self.scripts_dir);
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        tracing::info!(%command, "running remote script");

        let output = self.executor.execute(&command).await.map_err(|e| {
            ErrorNode::leaf("run_script", "failed to invoke remote transport", e.to_string())
        })?;
        if !output.success() {
            return Err(ErrorNode::leaf(
                "run_script",
                "ssh command error when running script",
                format!("error when running {command}: {}", output.stderr),
            ));
        }
        Ok(())
    }

    /// Feed one command line into the game server's console.
    ///
    /// The command passes through two shells (local ssh invocation, then the
    /// remote script), so it is wrapped in the exact quoting layer
    /// `run_mc_command.sh` expects.
    pub async fn run_console_command(&self, command: &str) -> Result<(), ErrorNode> {
        let quoted = format!("\"\\\"{command}\\\"\"");
        self.run_script("run_mc_command.sh", &[quoted]).await
    }

    /// Broadcast a chat message to everyone on the server.
    pub async fn broadcast(&self, message: &str) -> Result<(), ErrorNode> {
        self.run_console_command(&format!("/say {message}")).await
    }
}
