use crate::output;
use anyhow::Result;
use craftops_registry::PlayerRegistry;
use craftops_remote::Executor;
use craftops_runtime::Config;
use craftops_types::format_playtime;

pub async fn handle<E: Executor>(
    executor: &E,
    config: &Config,
    username: Option<&str>,
) -> Result<()> {
    let registry = PlayerRegistry::new(executor, config.server_dir.as_str());
    let players = match registry.fetch_players().await {
        Err(e) => {
            output::report_failure("Failed to get players data.", &e);
            return Ok(());
        }
        Ok(players) => players,
    };

    // Display names are not unique; a filter can match several accounts.
    let selected: Vec<_> = match username {
        None => players,
        Some(name) => players.into_iter().filter(|p| p.username == name).collect(),
    };
    if selected.is_empty() {
        match username {
            Some(name) => println!("No player with username `{name}` found."),
            None => println!("No players known to the server yet."),
        }
        return Ok(());
    }

    let uuids: Vec<String> = selected.iter().map(|p| p.uuid.clone()).collect();
    let stats = match registry.fetch_stats(&uuids).await {
        Err(e) => {
            output::report_failure("Failed to get player stats.", &e);
            return Ok(());
        }
        Ok(stats) => stats,
    };

    let mut rows: Vec<(String, u64)> = selected
        .iter()
        .zip(&stats)
        .map(|(identity, stat)| (identity.username.clone(), stat.playtime_seconds))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    println!("Playtime:");
    for (name, seconds) in rows {
        println!("`{name}`: {}", format_playtime(seconds));
    }
    Ok(())
}
