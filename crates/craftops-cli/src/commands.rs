use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;
use craftops_runtime::{AuthService, Config};

pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let operator = cli
        .operator
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "unknown".to_string());
    let executor = config.executor();
    let auth = AuthService::new(config.owner.clone(), config.privileged_users_path());

    match cli.command {
        Commands::Players => handlers::players::handle(&executor, &config).await,
        Commands::Playtime { username } => {
            handlers::playtime::handle(&executor, &config, username.as_deref()).await
        }
        Commands::LastSeen { username } => {
            handlers::last_seen::handle(&executor, &config, username.as_deref()).await
        }
        Commands::Exec { command } => {
            handlers::console::exec(&executor, &config, &auth, &operator, &command).await
        }
        Commands::Say { message } => {
            handlers::console::say(&executor, &config, &auth, &operator, &message).await
        }
        Commands::Grant { user } => handlers::ops::grant(&auth, &operator, &user),
        Commands::Revoke { user } => handlers::ops::revoke(&auth, &operator, &user),
        Commands::Refresh => handlers::refresh::handle(&executor, &config, &auth, &operator).await,
        Commands::Daemon => handlers::daemon::handle(&executor, &config).await,
    }
}
