use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use actions_updater::config::Config;
use actions_updater::logging::init_logging;
use actions_updater::report::report;
use actions_updater::updater::ActionsUpdater;
use actions_updater::version::registries::GitRegistry;

#[derive(Parser)]
#[command(name = "actions-updater")]
#[command(version, about = "Report newer tags for actions pinned in GitHub Actions workflows")]
struct Cli {
    /// Workflow files to scan
    #[arg(required = true, value_name = "WORKFLOW")]
    files: Vec<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host serving the action repositories
    #[arg(long)]
    host: Option<String>,

    /// git executable to run
    #[arg(long, value_name = "PATH")]
    git: Option<PathBuf>,

    /// Timeout for each remote tag listing, 0 disables it
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_overrides(cli.host, cli.git, cli.timeout_ms);
    debug!("Using {:?}", config);

    let mut updater = ActionsUpdater::new(Arc::new(GitRegistry::new(config)));
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(report(&mut updater, &cli.files, &mut std::io::stdout().lock()))?;

    Ok(())
}
