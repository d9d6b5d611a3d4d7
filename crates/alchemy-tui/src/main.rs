//! Alchemy: terminal dashboard for AI creative tools

mod app;
mod canvas;
mod forms;
mod icons;
mod sidebar;
mod theme;
mod views;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use alchemy_core::logging::{self, LogLevel};
use alchemy_core::{
    AppConfig, ConfigProvider, ConsoleLogger, EnvSecretStore, FileConfigProvider, FileLogger,
    Logger, SharedLogger,
};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "alchemy", version, about = "Terminal dashboard for AI creative tools")]
struct Cli {
    /// Config file (default: ~/.config/alchemy/config.yaml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Delay of the simulated image service, in milliseconds
    #[arg(long, value_name = "N")]
    simulated_delay_ms: Option<u64>,

    /// Directory rendered images are downloaded into
    #[arg(long, value_name = "DIR")]
    download_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> AppConfig {
    let provider = match &cli.config {
        Some(path) => FileConfigProvider::new(path),
        None => FileConfigProvider::user(),
    };

    let mut config = match provider.load() {
        Ok(config) => config,
        Err(e) => {
            // The terminal is still ours, so report on stderr
            ConsoleLogger::new().warn(&format!(
                "Could not load {}: {}; using defaults",
                provider.path().display(),
                e
            ));
            AppConfig::default()
        }
    };

    if let Some(delay) = cli.simulated_delay_ms {
        config.simulation.delay_ms = delay;
    }
    if let Some(dir) = &cli.download_dir {
        config.downloads.directory = Some(dir.clone());
    }
    config
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Restore the terminal before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    logging::clear_log();
    if cli.verbose {
        logging::set_min_level(LogLevel::Debug);
    }
    let logger: SharedLogger = Arc::new(FileLogger::new("alchemy"));

    let config = load_config(&cli);
    logger.info(&format!(
        "Config: model={} timeout={}s simulated_delay={}ms",
        config.image_service.model,
        config.image_service.request_timeout_secs,
        config.simulation.delay_ms
    ));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config, Arc::new(EnvSecretStore::new()), Arc::clone(&logger));
    let result = app.run(&mut terminal).await;

    restore_terminal();
    terminal.show_cursor().context("Failed to show cursor")?;

    if let Err(e) = &result {
        logger.error(&format!("Exited with error: {:#}", e));
    }
    if cli.verbose {
        eprintln!("Debug log: {}", logging::log_file_path().display());
    }
    result
}
