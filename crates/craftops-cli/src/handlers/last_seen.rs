use crate::output;
use anyhow::Result;
use craftops_logs::{Departure, LastSession, LogCache, LogScanner, last_sessions};
use craftops_registry::PlayerRegistry;
use craftops_remote::Executor;
use craftops_runtime::Config;
use craftops_types::{humanize_seconds, parse_log_timestamp, time_since};

pub async fn handle<E: Executor>(
    executor: &E,
    config: &Config,
    username: Option<&str>,
) -> Result<()> {
    let usernames: Vec<String> = match username {
        Some(name) => vec![name.to_string()],
        None => {
            let registry = PlayerRegistry::new(executor, config.server_dir.as_str());
            match registry.fetch_players().await {
                Err(e) => {
                    output::report_failure("Failed to get players data.", &e);
                    return Ok(());
                }
                Ok(players) => players.into_iter().map(|p| p.username).collect(),
            }
        }
    };
    if usernames.is_empty() {
        println!("No players known to the server yet.");
        return Ok(());
    }

    // One cache scope for the whole fan-out batch.
    let cache = LogCache::new();
    let scanner = LogScanner::new(executor, config.logs_dir.as_str(), &cache);
    for (name, result) in last_sessions(&scanner, &usernames).await {
        match result {
            Err(e) => {
                output::report_failure(&format!("Failed to get last session of `{name}`."), &e);
            }
            Ok(LastSession::NoData) => println!("`{name}`: No data"),
            Ok(LastSession::Session {
                joined_at,
                departure,
            }) => print_session(&name, &joined_at, departure),
        }
    }
    Ok(())
}

fn print_session(name: &str, joined_at: &str, departure: Departure) {
    let since = parse_log_timestamp(joined_at)
        .map(time_since)
        .unwrap_or_else(|| "unknown".to_string());
    match departure {
        Departure::LeftAt(left_at) => {
            let elapsed = match (parse_log_timestamp(joined_at), parse_log_timestamp(&left_at)) {
                (Some(joined), Some(left)) => humanize_seconds((left - joined).num_seconds()),
                _ => "unknown".to_string(),
            };
            println!("`{name}`: {joined_at} - {left_at} [{elapsed}] ({since} ago)");
        }
        Departure::StillPlaying => {
            println!("`{name}`: {joined_at} - Still playing ({since} ago)");
        }
        Departure::Failed(e) => {
            tracing::error!("leave lookup for {name} failed:\n{}", e.render());
            println!("`{name}`: {joined_at} - Error");
        }
    }
}
