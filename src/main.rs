use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;

use weapon_db_sync::app::ports::TargetFilePort;
use weapon_db_sync::infra::{FsTargetFile, ReqwestDocumentSource, StdoutTarget};
use weapon_db_sync::{logging, SyncConfig, SyncError, SyncReport, SyncUseCase};

#[derive(Parser)]
#[command(name = "weapon_db_sync")]
#[command(about = "Regenerate the auto-generated weapon table from the Arelith wiki")]
#[command(version)]
struct Cli {
    /// TOML file with source_url, output_path, start_marker, end_marker, timeout_seconds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page holding the weapon table (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// File containing the generation sentinels (overrides the config file)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the patched file to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

async fn run(cli: &Cli) -> anyhow::Result<SyncReport> {
    let mut config = SyncConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = &cli.url {
        config.source_url = url.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }

    let source = ReqwestDocumentSource::new(Duration::from_secs(config.timeout_seconds))
        .context("Failed to build HTTP client")?;
    let target: Box<dyn TargetFilePort> = if cli.dry_run {
        Box::new(StdoutTarget::new(&config.output_path))
    } else {
        Box::new(FsTargetFile::new(&config.output_path))
    };

    let use_case = SyncUseCase::new(config, Box::new(source), target);
    Ok(use_case.run().await?)
}

fn print_summary(report: &SyncReport) {
    eprintln!("\n📊 Weapon table sync for {}:", report.source_url);
    eprintln!("   Rows seen: {}", report.rows_seen);
    eprintln!("   Entries written: {}", report.entries_written);
    eprintln!("   Skipped: {}", report.skipped.len());
    eprintln!("   Output file: {}", report.output);

    if !report.skipped.is_empty() {
        eprintln!("\n⚠️  Skipped rows:");
        for skipped in &report.skipped {
            eprintln!("   - row {}: {}", skipped.row, skipped.reason);
        }
    }
    if !report.warnings.is_empty() {
        eprintln!("\n⚠️  Warnings:");
        for flagged in &report.warnings {
            eprintln!("   - row {} ({}): {}", flagged.row, flagged.name, flagged.warning);
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _guard = logging::init_logging();
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => error!("Failed to serialize report: {}", e),
                }
            } else {
                print_summary(&report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Weapon table sync failed: {:#}", e);
            let code = match e.downcast_ref::<SyncError>() {
                Some(sync_error) if sync_error.is_source_unavailable() => {
                    eprintln!("❌ Source document unavailable: {:#}", e);
                    sync_error.exit_code()
                }
                Some(sync_error) if sync_error.is_sentinel_failure() => {
                    eprintln!("❌ Failed to export weapons, target file left untouched: {:#}", e);
                    sync_error.exit_code()
                }
                Some(sync_error) => {
                    eprintln!("❌ {:#}", e);
                    sync_error.exit_code()
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    1
                }
            };
            ExitCode::from(code)
        }
    }
}
