//! Application configuration loaded from YAML.
//!
//! ```yaml
//! clear: ansi            # none | ansi | system
//! env_mode: multiple     # single | multiple
//! color: auto            # always | never | auto
//! palette:
//!   acc: [255, 128, 0]
//!   wrn: { fg: yellow, bold: true }
//! palette_file: colors.yaml
//! ```
//!
//! Every key is optional. [`AppConfig::from_env`] reads the file named by
//! `LIMELIGHT_CONFIG`.

use std::path::{Path, PathBuf};

use limelight_render::{ClearScreen, ColorChoice, EnvMode, TagError, Terminal};
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "LIMELIGHT_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Palette(#[from] TagError),
}

/// How the render loop clears the screen between passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearSetting {
    None,
    Ansi,
    #[default]
    System,
}

impl From<ClearSetting> for Option<ClearScreen> {
    fn from(setting: ClearSetting) -> Self {
        match setting {
            ClearSetting::None => None,
            ClearSetting::Ansi => Some(ClearScreen::ANSI),
            ClearSetting::System => Some(ClearScreen::System),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub clear: ClearSetting,
    pub env_mode: EnvMode,
    pub color: ColorChoice,
    /// Extra palette entries, in the same format as palette files.
    pub palette: serde_yaml::Mapping,
    /// Palette file merged before `palette`. Relative paths resolve against
    /// the config file's directory.
    pub palette_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&content)?;
        if let (Some(file), Some(dir)) = (config.palette_file.as_ref(), path.parent()) {
            if file.is_relative() {
                config.palette_file = Some(dir.join(file));
            }
        }
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Loads the file named by `LIMELIGHT_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Applies modes, color choice and palette to `terminal`.
    pub fn apply(&self, terminal: &mut Terminal) -> Result<(), ConfigError> {
        terminal.set_env_mode(self.env_mode);
        terminal.set_color_choice(self.color);
        if let Some(file) = &self.palette_file {
            terminal.colors_mut().load_palette(file)?;
        }
        if !self.palette.is_empty() {
            terminal
                .colors_mut()
                .merge_value(serde_yaml::Value::Mapping(self.palette.clone()))?;
        }
        Ok(())
    }

    pub fn clear_screen(&self) -> Option<ClearScreen> {
        self.clear.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limelight_render::PrintOptions;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::default().clear_screen(), Some(ClearScreen::System));
    }

    #[test]
    fn parses_all_keys() {
        let config = AppConfig::from_yaml(
            "clear: none\nenv_mode: multiple\ncolor: never\npalette:\n  acc: cyan\n",
        )
        .unwrap();
        assert_eq!(config.clear_screen(), None);
        assert_eq!(config.env_mode, EnvMode::Multiple);
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.palette.len(), 1);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = AppConfig::from_yaml("colour: auto\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn apply_registers_palette() {
        let config = AppConfig::from_yaml("palette:\n  acc: \"\\e[36m\"\n").unwrap();
        let (mut term, _) = Terminal::buffered();
        config.apply(&mut term).unwrap();
        assert_eq!(
            term.format(["$accx"], &PrintOptions::format()),
            "\x1b[36mx"
        );
    }

    #[test]
    fn bad_palette_entry_fails() {
        let config = AppConfig::from_yaml("palette:\n  acc: 999\n").unwrap();
        let (mut term, _) = Terminal::buffered();
        assert!(matches!(config.apply(&mut term), Err(ConfigError::Palette(_))));
    }

    #[test]
    fn palette_file_resolves_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("colors.yaml"), "acc: \"\\e[35m\"\n").unwrap();
        let config_path = dir.path().join("limelight.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "palette_file: colors.yaml").unwrap();

        let config = AppConfig::from_file(&config_path).unwrap();
        assert_eq!(config.palette_file, Some(dir.path().join("colors.yaml")));

        let (mut term, _) = Terminal::buffered();
        config.apply(&mut term).unwrap();
        assert_eq!(term.format(["$acc"], &PrintOptions::format()), "\x1b[35m");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    #[serial]
    fn from_env_unset_is_default() {
        std::env::remove_var(CONFIG_ENV);
        assert_eq!(AppConfig::from_env().unwrap(), AppConfig::default());
    }

    #[test]
    #[serial]
    fn from_env_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("limelight.yaml");
        std::fs::write(&path, "clear: ansi\n").unwrap();
        std::env::set_var(CONFIG_ENV, &path);
        let config = AppConfig::from_env();
        std::env::remove_var(CONFIG_ENV);
        assert_eq!(config.unwrap().clear_screen(), Some(ClearScreen::ANSI));
    }
}
