// Command-line interface

pub mod commands;

use crate::config::Settings;
use crate::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitecloner")]
#[command(about = "Website cloner - clone a page and preview it with working images", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the preview web UI
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Clone a website through the clone service
    Clone {
        /// URL of the website to clone
        url: String,

        /// Output HTML file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Make relative image URLs in a local HTML file absolute
    Normalize {
        /// Base URL the relative references are resolved against
        #[arg(short, long)]
        base: String,

        /// Input HTML file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output HTML file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the clone service is reachable
    Health,
}

/// Dispatch a parsed command
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Serve { port, host } => {
            let mut settings = load_settings()?;
            // CLI arguments override the environment
            if let Some(port) = port {
                settings.server.port = port;
            }
            if let Some(host) = host {
                settings.server.host = host;
            }
            crate::web::serve(settings).await?;
        }
        Commands::Clone { url, output } => {
            let settings = load_settings()?;
            commands::clone(&settings.service, &url, output.as_deref()).await?;
        }
        Commands::Normalize {
            base,
            input,
            output,
        } => {
            // Offline: no service or server settings involved
            commands::normalize_file(&base, input.as_deref(), output.as_deref()).await?;
        }
        Commands::Health => {
            let settings = load_settings()?;
            commands::health(&settings.service).await?;
        }
    }

    Ok(())
}

fn load_settings() -> Result<Settings> {
    let settings = Settings::from_env()?;
    settings.validate()?;
    Ok(settings)
}
