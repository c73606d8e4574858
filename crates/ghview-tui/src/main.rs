//! `ghview`: browse GitHub user profiles from the terminal.
//!
//! A search box, a home page with featured users, and a profile page per
//! `/profile/<username>` path. Lookups go to `{base_url}/users/<username>`.
//!
//! Logs are written to a file (default `/tmp/ghview.log`) so they never
//! mix with the UI.

mod action;
mod app;
mod component;
mod event;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ghview_config::Config;
use ghview_core::ProfileFetcher;

use crate::app::App;

/// Terminal browser for GitHub user profiles.
#[derive(Parser, Debug)]
#[command(name = "ghview", version, about)]
struct Cli {
    /// Path to open on startup, e.g. /profile/octocat
    path: Option<String>,

    /// Profile API root (defaults to https://api.github.com)
    #[arg(short = 'u', long, env = "GHVIEW_BASE_URL")]
    base_url: Option<String>,

    /// Log file path
    #[arg(long, default_value = "/tmp/ghview.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

/// File-only tracing. The returned guard flushes the writer on drop.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ghview={log_level},ghview_core={log_level},ghview_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("."));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("ghview.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Config file, then `GHVIEW_BASE_URL`, then `--base-url`.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let config = ghview_config::load_config().wrap_err_with(|| {
        format!(
            "failed to load {}",
            ghview_config::config_path().display()
        )
    })?;
    Ok(config.with_base_url(cli.base_url.clone()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::install_hooks()?;
    let _log_guard = setup_tracing(&cli);

    let config = resolve_config(&cli)?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let fetcher_config = config.fetcher_config()?;
    info!(
        base_url = %fetcher_config.base_url,
        timeout = ?fetcher_config.timeout,
        path = cli.path.as_deref().unwrap_or("/"),
        "starting ghview"
    );

    let fetcher = ProfileFetcher::new(&fetcher_config).wrap_err("failed to build HTTP client")?;
    let mut app = App::new(fetcher, cli.path);
    app.run().await?;

    Ok(())
}
