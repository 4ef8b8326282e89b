use crate::output;
use anyhow::Result;
use craftops_remote::Executor;
use craftops_runtime::{AuthService, Authorization, Capability, Config, ConsoleService};

pub async fn exec<E: Executor>(
    executor: &E,
    config: &Config,
    auth: &AuthService,
    operator: &str,
    command: &str,
) -> Result<()> {
    if let Authorization::Denied { reason } = auth.authorize(operator, Capability::Owner)? {
        output::deny(&reason);
        return Ok(());
    }

    let console = ConsoleService::new(executor, config.scripts_dir.as_str());
    match console.run_console_command(command).await {
        Ok(()) => output::confirm("Command sent to the server console."),
        Err(e) => output::report_failure("Failed to run command.", &e),
    }
    Ok(())
}

pub async fn say<E: Executor>(
    executor: &E,
    config: &Config,
    auth: &AuthService,
    operator: &str,
    message: &str,
) -> Result<()> {
    if let Authorization::Denied { reason } = auth.authorize(operator, Capability::Privileged)? {
        output::deny(&reason);
        return Ok(());
    }

    let console = ConsoleService::new(executor, config.scripts_dir.as_str());
    match console.broadcast(message).await {
        Ok(()) => output::confirm("Message broadcast to the server."),
        Err(e) => output::report_failure("Failed to broadcast message.", &e),
    }
    Ok(())
}
