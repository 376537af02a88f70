//! # Storefront Entry Point
//!
//! ```bash
//! # Browse with the default config
//! storefront
//!
//! # Explicit config, nothing written to disk
//! storefront --config ./storefront.toml --ephemeral
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use storefront_app::RunOptions;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version, about = "Browse the catalog, fill a cart, keep favorites")]
struct Cli {
    /// Path to storefront.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = RunOptions {
        config_path: cli.config,
        ephemeral: cli.ephemeral,
    };

    match storefront_app::run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
