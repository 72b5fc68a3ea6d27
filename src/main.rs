use anyhow::{Context, Result};
use clap::Parser;
use vm_reaper::{cli::reap::ReapOutcome, compute::ComputeProvider, ReaperConfig};

#[derive(Parser)]
#[command(name = "vm-reaper")]
#[command(about = "Delete the oldest running VM of a service in a Compute Engine zone", long_about = None)]
struct Cli {
    /// Google Cloud project ID
    #[arg(long, alias = "project_id", env = "GOOGLE_CLOUD_PROJECT")]
    project_id: String,

    /// Google Cloud zone (us-central1-c, etc.)
    #[arg(long, env = "VM_REAPER_ZONE")]
    zone: String,

    /// Value of the `service` label a VM must carry to be considered for deletion
    #[arg(long, alias = "service_name_label", env = "VM_REAPER_SERVICE")]
    service_name_label: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let config = ReaperConfig::new(cli.project_id, cli.zone, cli.service_name_label);

    let provider = ComputeProvider::new()
        .await
        .context("Failed to initialize Compute Engine clients")?;

    match vm_reaper::cli::reap::execute(&config, &provider).await? {
        ReapOutcome::NothingToDo => tracing::debug!("Nothing to reap"),
        ReapOutcome::Deleted { name, .. } => tracing::debug!("Reaped {}", name),
    }

    Ok(())
}
