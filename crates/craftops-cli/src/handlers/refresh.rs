use crate::output;
use anyhow::Result;
use craftops_registry::{PlayerRegistry, PlayerStore};
use craftops_remote::Executor;
use craftops_runtime::{AuthService, Authorization, Capability, Config};

pub async fn handle<E: Executor>(
    executor: &E,
    config: &Config,
    auth: &AuthService,
    operator: &str,
) -> Result<()> {
    if let Authorization::Denied { reason } = auth.authorize(operator, Capability::Privileged)? {
        output::deny(&reason);
        return Ok(());
    }

    let registry = PlayerRegistry::new(executor, config.server_dir.as_str());
    let store = PlayerStore::new(config.players_path());
    match registry.refresh(&store).await {
        Ok(count) => output::confirm(&format!("Registry refreshed: {count} players.")),
        Err(e) => output::report_failure("Failed to refresh player data.", &e),
    }
    Ok(())
}
