use crate::output;
use anyhow::Result;
use craftops_registry::PlayerRegistry;
use craftops_remote::Executor;
use craftops_runtime::Config;

pub async fn handle<E: Executor>(executor: &E, config: &Config) -> Result<()> {
    let registry = PlayerRegistry::new(executor, config.server_dir.as_str());
    match registry.fetch_players().await {
        Err(e) => output::report_failure("Failed to get players data.", &e),
        Ok(players) if players.is_empty() => println!("No players known to the server yet."),
        Ok(players) => {
            let names: Vec<String> = players
                .iter()
                .map(|p| format!("`{}`", p.username))
                .collect();
            println!("Players on the server: {}", names.join(", "));
        }
    }
    Ok(())
}
