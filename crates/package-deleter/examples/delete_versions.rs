//! Example of checking the rate limit and deleting package versions
//!
//! This example shows how to:
//! 1. Load a registry token from the environment
//! 2. Print the current rate-limit snapshot
//! 3. Delete a batch of versions and watch outcomes arrive
//!
//! # Prerequisites
//!
//! Create a .env file in the project root with a token that has the
//! `delete:packages` scope:
//!    ```
//!    GITHUB_TOKEN=your_token_here
//!    ```
//!
//! # Usage
//!
//! ```bash
//! cargo run --example delete_versions -- <PACKAGE_VERSION_ID>...
//! ```

use futures::StreamExt;
use package_deleter::{Credentials, DeleteConfig, PackageDeleter, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let credentials = Credentials::from_env()?;
    let deleter = PackageDeleter::new(DeleteConfig::default())?;

    let status = deleter.get_rate_limit(&credentials).await?;
    println!("📊 {}", status.format_status());
    println!("⏰ {}", status.time_until_reset());

    let ids: Vec<String> = std::env::args().skip(1).collect();
    if ids.is_empty() {
        println!("No package version IDs given, nothing to delete");
    }

    let mut outcomes = deleter.delete_package_versions(ids, &credentials);
    while let Some(outcome) = outcomes.next().await {
        match outcome {
            Ok(deleted) => println!("✓ deleted: {}", deleted),
            Err(e) => println!("✗ {}", e.detailed_report()),
        }
    }

    let snapshot = deleter.counter().snapshot();
    println!(
        "Attempted {}, deleted {}, not deleted {}, failed {}",
        snapshot.attempted, snapshot.deleted, snapshot.not_deleted, snapshot.failed
    );

    Ok(())
}
