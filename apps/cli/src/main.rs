//! Command-line front end for the package deleter

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::StreamExt;
use package_deleter::{Credentials, DeleteConfig, PackageDeleter, ThrottleMode};

#[derive(Parser, Debug)]
#[command(name = "package-deleter")]
#[command(version, about = "Check registry rate limits and delete package versions", long_about = None)]
struct Cli {
    /// Registry token (falls back to GITHUB_TOKEN, including from a .env file)
    #[arg(long, global = true)]
    token: Option<String>,

    /// GraphQL endpoint override
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Really wait when the deletion counter reaches the throttle threshold
    #[arg(long, global = true)]
    pause_on_throttle: bool,

    /// Skip the background rate-limit probe before each delete
    #[arg(long, global = true)]
    no_probe: bool,

    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the authenticated login and current rate-limit counters
    RateLimit,

    /// Delete package versions by ID
    Delete {
        /// Package version IDs; none at all is a no-op success
        ids: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let credentials = match cli.token {
        Some(token) => Credentials::new(token),
        None => Credentials::from_env().context("no registry token available")?,
    };

    let mut config = DeleteConfig::default().with_rate_limit_probe(!cli.no_probe);
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if cli.pause_on_throttle {
        config = config.with_throttle_mode(ThrottleMode::Pause);
    }

    let deleter = PackageDeleter::new(config).context("failed to set up the registry client")?;

    match cli.command {
        Commands::RateLimit => {
            let status = deleter.get_rate_limit(&credentials).await?;
            println!("{}", status.format_status());
            println!("{}", status.time_until_reset());
        }
        Commands::Delete { ids } => {
            let mut outcomes = deleter.delete_package_versions(ids, &credentials);
            let mut failed = 0usize;

            while let Some(outcome) = outcomes.next().await {
                if let Err(e) = outcome {
                    failed += 1;
                    eprintln!("{}", e);
                }
            }

            if failed > 0 {
                anyhow::bail!("{} package version deletion(s) failed", failed);
            }
        }
    }

    Ok(())
}
