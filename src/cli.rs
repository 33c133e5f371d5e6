use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use crate::config::ConfigOverrides;
use commands::serve;

#[derive(Parser)]
#[command(name = "ticker-predictor")]
#[command(about = "Serves the ticker prediction UI and forwards its requests to the prediction service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Every option falls back to its TICKER_* environment variable
    /// (e.g. TICKER_UPSTREAM_URL), then to the built-in default.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Base URL of the prediction service
        ///
        /// Must answer POST /predict and POST /historical_data_1.
        /// Example: http://127.0.0.1:5000
        #[arg(short, long)]
        upstream_url: Option<String>,

        /// Directory holding the built frontend bundle (index.html + wasm)
        #[arg(short, long)]
        static_dir: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, upstream_url, static_dir } => {
                let overrides = ConfigOverrides {
                    bind_address,
                    upstream_url,
                    static_dir,
                };
                serve(overrides).await?;
            }
        }
        Ok(())
    }
}
