//! CLI for the Iosevka webfont release synchronizer.
//!
//! Fetches the latest upstream release and republishes every webfont asset
//! into its per-variant GitHub Pages repository.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use webfont_sync::{RunSummary, Runner, RunnerError, SyncConfig};

/// Webfont Sync - Republish the latest Iosevka webfont release into per-variant Pages repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Upstream source project, "owner/repo".
    #[arg(long, default_value = "be5invis/Iosevka")]
    upstream: String,

    /// Organization hosting the per-variant repositories.
    #[arg(long, default_value = "iosevka-webfonts")]
    org: String,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: String,

    /// Username paired with the token in authenticated clone URLs.
    #[arg(long, env = "GITHUB_USERNAME")]
    username: String,

    /// Re-sync every variant even when its release marker matches.
    #[arg(long, env = "FORCE_UPDATE")]
    force_update: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = SyncConfig::new(
        args.upstream,
        args.org,
        args.token,
        args.username,
        args.force_update,
    );
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Release: {}", summary.release_tag);
    println!("  Webfont assets: {}", summary.assets_matched);
    println!("  Synced: {}", summary.synced);
    println!("  Unchanged: {}", summary.unchanged);
    println!("  Up to date: {}", summary.up_to_date);
    println!("  Failed: {}", summary.failed);

    for failure in &summary.failures {
        println!("    {} - {}", failure.asset, failure.error);
    }
}
