use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "usercache", version, about = "Browse a remote user directory - works offline")]
pub struct Cli {
    /// Base URL of the user service (overrides config and USERCACHE_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Skip the network and use cached data only
    #[arg(long, global = true)]
    pub offline: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List users, optionally filtered by name or email
    List {
        /// Case-insensitive text matched against name and email
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show details for one user
    Show {
        id: i64,

        /// Print JSON instead of a detail view
        #[arg(long)]
        json: bool,
    },
    /// Report connectivity and cache state
    Status,
}
