use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;

use snekgrid::app::{self, App, EventQueue};
use snekgrid::{Game, GameConfig, Status};

#[derive(Parser)]
#[command(name = "snekgrid")]
#[command(version, about = "Snake on a fixed grid in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: u16,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log; the terminal is taken by the game
    #[arg(long, default_value = "snekgrid.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    info!("Starting snekgrid");

    let config = GameConfig::new(cli.width, cli.height);
    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    let game = match cli.seed {
        Some(seed) => Game::with_seed(&config, seed),
        None => Game::new(&config),
    };
    let mut app = App::new(game);

    let mut terminal = setup_terminal()?;
    let queue = EventQueue::start(config.tick_rate);

    let result = app::run(&mut terminal, &mut app, queue.receiver());
    let input_result = queue.shutdown();

    // Restore the terminal even if the loop failed
    let restored = restore_terminal(&mut terminal);
    settle(result, restored)?;
    input_result.context("Input reader failed")?;

    match app.game().status() {
        Status::Running => info!("Quit with score {}", app.game().score()),
        status => info!("Finished ({:?}) with score {}", status, app.game().score()),
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let terminal = (|| -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    })();

    if terminal.is_err() {
        // Best effort; the setup error is the one to report
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    terminal
}

/// Reports the game loop's error ahead of a failed terminal restore. Both are
/// logged.
fn settle(loop_result: io::Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &loop_result {
        error!("Game loop failed: {}", e);
    }
    if let Err(e) = &restored {
        error!("Failed to restore terminal: {:#}", e);
    }
    loop_result.context("Game loop failed")?;
    restored
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["snekgrid"]);
        assert_eq!(cli.width, 20);
        assert_eq!(cli.height, 20);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, PathBuf::from("snekgrid.log"));
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Info);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "snekgrid",
            "--width",
            "30",
            "--height",
            "15",
            "--seed",
            "42",
            "--log-level",
            "trace",
        ]);
        assert_eq!(cli.width, 30);
        assert_eq!(cli.height, 15);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Trace);
    }

    #[test]
    fn test_settle_prefers_loop_error() {
        let loop_err = Err(io::Error::new(io::ErrorKind::BrokenPipe, "draw failed"));
        let restore_err = Err(anyhow!("Failed to leave alternate screen"));

        let err = settle(loop_err, restore_err).unwrap_err();
        assert_eq!(err.to_string(), "Game loop failed");
        assert!(format!("{:#}", err).contains("draw failed"));
    }

    #[test]
    fn test_settle_reports_restore_error() {
        let err = settle(Ok(()), Err(anyhow!("Failed to show cursor"))).unwrap_err();
        assert_eq!(err.to_string(), "Failed to show cursor");
        assert!(settle(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["snekgrid", "--log-level", "loud"]).is_err());
    }
}
