mod client;
mod commands;
mod render;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trailforward_core::config::SiteConfig;
use trailforward_core::events::EventForm;
use trailforward_core::gallery::Direction;
use trailforward_core::maps::Platform;

use crate::client::Client;

#[derive(Parser)]
#[command(name = "trailforward")]
#[command(about = "Browse and manage Trail Forward events and the photo gallery")]
struct Cli {
    /// Server base URL (defaults to server_url from the config file)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Platform whose map links are shown (ios, android or desktop)
    #[arg(long, global = true)]
    platform: Option<Platform>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming and past events
    Events {
        /// Show delete controls
        #[arg(long)]
        edit: bool,
    },
    /// Add an event
    Add {
        name: String,

        /// Date and time (e.g. "2025-03-20T15:00" or "2025-03-20")
        #[arg(short, long)]
        date: String,

        #[arg(short, long)]
        location: String,
    },
    /// Delete an event by id
    Delete { id: i64 },
    /// Browse the photo gallery
    Gallery {
        /// Number of images visible at once
        #[arg(short, long)]
        window: Option<usize>,

        /// Moves to apply after loading, e.g. "next,next,previous"
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<Direction>,

        /// Read moves from stdin until "q"
        #[arg(short, long)]
        interactive: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::load().context("Failed to load configuration")?;

    let server = cli.server.unwrap_or_else(|| config.server_url.clone());
    let client = Client::new(&server, Duration::from_secs(config.request_timeout_secs))?;
    let platform = cli.platform.unwrap_or_default();

    match cli.command {
        Commands::Events { edit } => {
            commands::events::run(client, config.board_context(edit, platform), Utc::now()).await
        }
        Commands::Add { name, date, location } => {
            let form = EventForm { name, date, location };
            commands::add::run(client, config.board_context(false, platform), form, Utc::now()).await
        }
        Commands::Delete { id } => {
            commands::delete::run(client, config.board_context(true, platform), id, Utc::now()).await
        }
        Commands::Gallery {
            window,
            moves,
            interactive,
        } => {
            let window = window.unwrap_or(config.gallery_window);
            commands::gallery::run(client, window, &moves, interactive).await
        }
    }
}
