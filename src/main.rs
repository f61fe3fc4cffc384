use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use versioning::cli::{self, BumpWorkflowArgs};
use versioning::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "versioning",
    about = "Bump the semantic version stored in a VERSION file"
)]
struct Args {
    #[arg(help = "Bump level: major, minor or release")]
    level: Option<String>,

    #[arg(short, long, help = "Path to the VERSION file [default: ./VERSION]")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the next version without writing it")]
    dry_run: bool,

    #[arg(short, long, help = "Log file operations to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(args.verbose).context("failed to initialize logging")?;

    let Some(level) = args.level else {
        ui::display_usage();
        return Ok(());
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = BumpWorkflowArgs {
        level,
        path: config.version_file(args.file.as_deref()),
        dry_run: args.dry_run || config.behavior.dry_run,
    };

    match cli::run_bump_workflow(workflow_args) {
        Ok(outcome) => {
            if !outcome.written {
                ui::display_status(&ui::dry_run_summary(&outcome));
            }
            ui::display_version(&outcome);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
