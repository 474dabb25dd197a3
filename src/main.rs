mod backend;
mod config;
mod consts;
mod events;
mod logging;
mod record;
mod runtime;
mod session;
mod table;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::session::{OneShot, run_headless_mode, run_one_shot, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Dashboard for a proxy connection manager
struct Args {
    /// Base URL of the connection manager backend
    #[arg(long, global = true, env = "DASHBOARD_SERVER_URL", value_name = "URL")]
    server_url: Option<String>,

    /// Seconds to wait after one client list fetch completes before the next
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    poll_interval: Option<u64>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the live dashboard
    Start {
        /// Print updates to the console instead of drawing the dashboard
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Fetch and print the client list once
    List,
    /// Print the recent logs of one client
    Logs {
        /// Client ID (not the user ID)
        id: String,
    },
    /// Delete one client
    Delete {
        /// Client ID (not the user ID)
        id: String,
    },
    /// Delete every client
    DeleteAll,
    /// Upload an accounts file, one `USER_ID[==PROXY_URL]` per line
    Upload {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Add one client
    Add {
        #[arg(value_name = "USER_ID")]
        user_id: String,

        #[arg(long, value_name = "URL")]
        proxy_url: Option<String>,
    },
    /// Save the backend URL (and poll interval) to the config file
    SetServer {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the saved config file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(logging::get_rust_log_level().into());

    let args = Args::parse();
    let config_path = get_config_path()?;

    let one_shot = match args.command {
        Command::SetServer { url } => {
            let mut config = Config::load_or_default(&config_path)?;
            config.server_url = url;
            if let Some(secs) = args.poll_interval {
                config.poll_interval_secs = secs;
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Saved server {} to {}", config.server_url, config_path.display());
            return Ok(());
        }
        Command::ClearConfig => {
            println!("Clearing dashboard configuration file...");
            Config::clear(&config_path)?;
            return Ok(());
        }
        Command::Start {
            headless,
            with_background,
        } => {
            let dashboard_config = Config::load_or_default(&config_path)
                .map_err(|e| format!("Failed to load config: {}", e))?
                .resolve(args.server_url, args.poll_interval);
            let session = setup_session(&dashboard_config)?;
            return if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            };
        }
        Command::List => OneShot::List,
        Command::Logs { id } => OneShot::Logs(id),
        Command::Delete { id } => OneShot::Delete(id),
        Command::DeleteAll => OneShot::DeleteAll,
        Command::Upload { path } => OneShot::Upload(path),
        Command::Add { user_id, proxy_url } => OneShot::Add { user_id, proxy_url },
    };

    let dashboard_config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config: {}", e))?
        .resolve(args.server_url, args.poll_interval);
    run_one_shot(&dashboard_config, one_shot).await
}
