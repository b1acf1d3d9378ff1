//! usercache - browse a remote user directory from the terminal.
//!
//! Lists users, searches by name or email, and shows per-user detail. The
//! last full listing is cached on disk so everything keeps working offline.

mod app;
mod cli;
mod render;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use usercache_core::models::filter_users;

use app::App;
use cli::{Cli, Command};

/// Initialize the tracing subscriber for logging
fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose when set
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    info!("usercache starting");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            eprintln!("Run the same command again to retry.");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let app = App::new(&cli)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::List { search, json } => {
            let fetched = app.list_users().await?;
            let query = search.as_deref().unwrap_or("");
            if json {
                let users = fetched.into_inner();
                serde_json::to_writer_pretty(&mut out, &filter_users(&users, query))?;
                render::newline(&mut out)?;
            } else {
                let last_saved = app.cache_last_saved().await;
                render::user_list(&mut out, &fetched, query, last_saved)?;
            }
        }
        Command::Show { id, json } => {
            let fetched = app.show_user(id).await?;
            if json {
                serde_json::to_writer_pretty(&mut out, &fetched.into_inner())?;
                render::newline(&mut out)?;
            } else {
                let last_saved = app.cache_last_saved().await;
                render::user_detail(&mut out, &fetched, last_saved)?;
            }
        }
        Command::Status => {
            let status = app.status().await;
            render::status(&mut out, &status)?;
        }
    }
    Ok(())
}
