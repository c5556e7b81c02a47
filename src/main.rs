use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod client;
mod commands;
mod constants;
mod domain;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::client::{HttpConfig, SupabaseClient};
use crate::state::{App, AppConfig, ConfigOverrides};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "plotview=info";

/// plotview - terminal detail page for a single plot listing
#[derive(Debug, Parser)]
#[command(version = VERSION, about, long_about = None, subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Identifier of the plot to show
    #[arg(value_name = "PLOT_ID", required = true)]
    plot_id: Option<String>,

    /// Supabase project URL
    #[arg(long, env = "SUPABASE_URL", global = true)]
    url: Option<String>,

    /// Supabase anon key
    #[arg(long, env = "SUPABASE_ANON_KEY", global = true, hide_env_values = true)]
    anon_key: Option<String>,

    /// Table holding the listings [default: plots]
    #[arg(long, global = true)]
    table: Option<String>,

    /// Request timeout in seconds, 0 disables it
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Log file path
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Config {
        /// Write the resolved configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            supabase_url: self.url.clone(),
            anon_key: self.anon_key.clone(),
            table: self.table.clone(),
            request_timeout_secs: self.timeout,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log_path = match &cli.log_file {
        Some(path) => path.clone(),
        None => AppConfig::default_log_path()?,
    };
    // Flushes buffered log lines when main returns.
    let _log_guard = init_tracing(&log_path)?;

    let config = AppConfig::load().with_overrides(cli.overrides());

    if let Some(Commands::Config { save }) = &cli.command {
        return print_config(&config, *save);
    }

    config.validate().map_err(|e| e.into_report())?;

    let plot_id = cli.plot_id.unwrap_or_default();
    let http = HttpConfig::from_timeout_secs(config.request_timeout_secs);
    let store = SupabaseClient::new(&config.supabase_url, &config.anon_key, &config.table, &http)
        .map_err(|e| e.into_report())?;

    tracing::info!(plot_id = %plot_id, table = %config.table, "Starting plotview");

    let mut terminal = tui::init()?;
    let mut app = App::new(Arc::new(store), plot_id);
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    result
}

/// Print (and optionally save) the merged configuration.
fn print_config(config: &AppConfig, save: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    println!("Config file: {}", path.display());
    println!("supabase_url: {}", config.supabase_url);
    println!("anon_key: {}", config.masked_key());
    println!("table: {}", config.table);
    println!("request_timeout_secs: {}", config.request_timeout_secs);

    if save {
        config.save()?;
        println!("Saved.");
    }
    Ok(())
}

/// Route `tracing` output to a file; the terminal belongs to the UI.
///
/// Lines are written on a background thread until the guard is dropped.
fn init_tracing(path: &Path) -> Result<WorkerGuard> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Already installed (tests) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_plot_and_overrides() {
        let cli = Cli::try_parse_from([
            "plotview",
            "plot-42",
            "--url",
            "https://demo.supabase.co",
            "--table",
            "listings",
            "--timeout",
            "0",
        ])
        .unwrap();

        assert_eq!(cli.plot_id.as_deref(), Some("plot-42"));
        let overrides = cli.overrides();
        assert_eq!(overrides.table.as_deref(), Some("listings"));
        assert_eq!(overrides.request_timeout_secs, Some(0));
    }

    #[test]
    fn test_config_subcommand_needs_no_plot_id() {
        let cli = Cli::try_parse_from(["plotview", "config", "--table", "plots"]).unwrap();

        assert!(matches!(cli.command, Some(Commands::Config { save: false })));
        assert!(cli.plot_id.is_none());
        assert_eq!(cli.table.as_deref(), Some("plots"));
    }

    #[test]
    fn test_plot_id_is_required_without_subcommand() {
        assert!(Cli::try_parse_from(["plotview"]).is_err());
    }

    // The only test that installs the global subscriber.
    #[test]
    fn test_config_fallback_is_written_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("plotview.log");
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "{ not json").unwrap();

        let guard = init_tracing(&log_path).unwrap();
        let config = AppConfig::load_from(&config_path);
        drop(guard);

        assert_eq!(config, AppConfig::default());
        let log = std::fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("Config load failed, using defaults"), "{log}");
    }
}
