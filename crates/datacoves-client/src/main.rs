//! Fetch the latest manifest for a dbt project and print it to stdout.

use anyhow::Result;
use clap::Parser;
use datacoves_client::{Datacoves, ReferenceConfig, SystemEnv};

/// Datacoves manifest fetcher
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project whose latest manifest to fetch
    project_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ReferenceConfig::from_env(&SystemEnv, args.project_name);
    let client = Datacoves::from_config(&config);

    tracing::info!(
        project = %config.project_name,
        endpoint = %config.api_endpoint,
        "Fetching latest manifest"
    );

    let manifest = client.get_models().await?;
    println!("{}", serde_json::to_string_pretty(&manifest)?);

    Ok(())
}
