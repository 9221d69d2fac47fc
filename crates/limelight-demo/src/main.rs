//! `limelight-demo`: a tour of the Limelight toolkit.
//!
//! Logging goes to stderr and is filtered by `LIMELIGHT_LOG` (same syntax as
//! `RUST_LOG`). Configuration comes from `--config` or `LIMELIGHT_CONFIG`.

mod cli;
mod commands;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use limelight::{AppConfig, Application, Terminal};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

const LOG_ENV: &str = "LIMELIGHT_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::from_env().context("loading config from LIMELIGHT_CONFIG")?,
    };
    Ok(match cli.color {
        Some(color) => AppConfig { color, ..config },
        None => config,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "starting");

    let mut app = Application::from_config(Terminal::new(), &config)?;
    match cli.command {
        Command::Notice { level, message } => {
            commands::notice(app.terminal_mut(), level.into(), &message)?
        }
        Command::Progress {
            steps,
            delay_ms,
            width,
        } => commands::progress(
            app.terminal_mut(),
            steps,
            Duration::from_millis(delay_ms),
            width,
        )?,
        Command::Palette => commands::palette(app.terminal_mut())?,
        Command::Menu => commands::menu(&mut app)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn color_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("limelight.yaml");
        std::fs::write(&path, "color: always\nenv_mode: multiple\n").unwrap();

        let cli = Cli::parse_from([
            "limelight-demo",
            "--config",
            path.to_str().unwrap(),
            "--color",
            "never",
            "palette",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.color, limelight::ColorChoice::Never);
        assert_eq!(config.env_mode, limelight::EnvMode::Multiple);
    }

    #[test]
    #[serial]
    fn missing_config_file_is_reported() {
        let cli = Cli::parse_from(["limelight-demo", "--config", "/nonexistent/limelight.yaml", "menu"]);
        let err = load_config(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("loading config /nonexistent/limelight.yaml"));
    }
}
