use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "craftops",
    version,
    about = "Admin console for a self-hosted Minecraft server reachable over ssh"
)]
pub struct Cli {
    /// Operator name used for permission checks (defaults to $USER)
    #[arg(long, global = true)]
    pub operator: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all players known to the server
    Players,

    /// Show playtime, for everyone or for one username
    Playtime {
        /// Display name to filter by; may match several accounts
        username: Option<String>,
    },

    /// Show when players last joined and left the server
    LastSeen {
        /// Display name to look up; omit for all known players
        username: Option<String>,
    },

    /// Run a command on the game server's console (owner only)
    Exec {
        /// The console command, quoted as one argument
        command: String,
    },

    /// Broadcast a chat message to everyone on the server (privileged)
    Say {
        /// The message, quoted as one argument
        message: String,
    },

    /// Grant privileged status to an operator (owner only)
    Grant { user: String },

    /// Revoke privileged status from an operator (owner only)
    Revoke { user: String },

    /// Refresh the persisted player registry now (privileged)
    Refresh,

    /// Run the long-lived service with the daily refresh schedule
    Daemon,
}
