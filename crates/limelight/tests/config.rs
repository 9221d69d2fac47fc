use std::io::Write;

use limelight::config::CONFIG_ENV;
use limelight::{AppConfig, Application, ClearScreen, EnvMode, PrintOptions, Terminal};
use serial_test::serial;

#[test]
#[serial]
fn test_application_from_env_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("limelight.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "clear: ansi").unwrap();
    writeln!(file, "env_mode: multiple").unwrap();
    writeln!(file, "palette:").unwrap();
    writeln!(file, "  hot: red").unwrap();
    drop(file);

    std::env::set_var(CONFIG_ENV, &path);
    let config = AppConfig::from_env();
    std::env::remove_var(CONFIG_ENV);
    let config = config.unwrap();

    let (term, _) = Terminal::buffered();
    let mut app = Application::from_config(term, &config).unwrap();
    let term = app.terminal_mut();
    assert_eq!(term.envs().mode(), EnvMode::Multiple);
    assert_eq!(
        term.format(["$hotfire$res"], &PrintOptions::format()),
        "\x1b[31mfire\x1b[0m"
    );
    assert_eq!(config.clear_screen(), Some(ClearScreen::ANSI));
}

#[test]
#[serial]
fn test_empty_env_var_uses_defaults() {
    std::env::set_var(CONFIG_ENV, "");
    let config = AppConfig::from_env();
    std::env::remove_var(CONFIG_ENV);
    assert_eq!(config.unwrap(), AppConfig::default());
}
