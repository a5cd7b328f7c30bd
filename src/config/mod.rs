pub mod toml_config;

use crate::core::{RunSettings, SettingsProvider};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "greet-loop"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Doubles a number, counts to five and says hello")
)]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Override the number to double
    #[cfg_attr(feature = "cli", arg(long, allow_negative_numbers = true))]
    pub input: Option<i32>,

    /// Override the iteration count
    #[cfg_attr(feature = "cli", arg(long))]
    pub iterations: Option<u32>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}

impl SettingsProvider for CliConfig {
    fn input(&self) -> Option<i32> {
        self.input
    }

    fn iterations(&self) -> Option<u32> {
        self.iterations
    }

    fn label(&self) -> Option<&str> {
        None
    }

    fn greeting(&self) -> Option<&str> {
        None
    }
}

impl CliConfig {
    /// 內建預設值 < TOML 檔案 < 命令列參數
    pub fn resolve_settings(&self) -> Result<RunSettings> {
        let mut settings = RunSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("📁 Loading settings from: {}", path);
            settings = TomlConfig::from_file(path)?.apply_to(settings);
        }

        let settings = self.apply_to(settings);
        settings.validate()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_resolves_to_defaults() {
        let settings = CliConfig::default().resolve_settings().unwrap();
        assert_eq!(settings, RunSettings::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[run]\ninput = 100\niterations = 1\nlabel = \"Count\"\n")
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_string_lossy().into_owned()),
            input: Some(3),
            ..CliConfig::default()
        };
        let settings = cli.resolve_settings().unwrap();

        assert_eq!(settings.input, 3);
        assert_eq!(settings.iterations, 1);
        assert_eq!(settings.label, "Count");
        assert_eq!(settings.greeting, "Hello, World!");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = CliConfig {
            iterations: Some(50_000),
            ..CliConfig::default()
        };
        let err = cli.resolve_settings().unwrap_err();
        assert!(matches!(err, AppError::InvalidConfigValueError { ref field, .. } if field == "run.iterations"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from(["greet-loop", "--input", "-4", "--iterations", "2", "-v"]);
        assert_eq!(cli.input, Some(-4));
        assert_eq!(cli.iterations, Some(2));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }
}
