use anyhow::Result;
use craftops_registry::PlayerStore;
use craftops_remote::Executor;
use craftops_runtime::{Config, DailyRefresh};

pub async fn handle<E: Executor>(executor: &E, config: &Config) -> Result<()> {
    // First start: make sure the data directory and the privileged-user
    // list exist before anything tries to read them.
    std::fs::create_dir_all(&config.data_dir)?;
    let ops_path = config.privileged_users_path();
    if !ops_path.exists() {
        std::fs::write(&ops_path, "")?;
    }

    let store = PlayerStore::new(config.players_path());
    let refresh = DailyRefresh::new(executor, config.server_dir.as_str(), store);

    tracing::info!(
        host = %config.ssh_host,
        data_dir = %config.data_dir.display(),
        "craftops daemon started"
    );
    tokio::select! {
        _ = refresh.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received, stopping");
        }
    }
    Ok(())
}
