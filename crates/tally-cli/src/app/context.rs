//! Application context for the Tally CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file. Flags always
//! win over config values.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{load_config, resolve_config_path, TallyConfig};
use crate::ui::UiContext;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TallyConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&TallyConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli.config.as_deref());
            load_config(path.as_deref())
        })
    }

    /// UI context from flags, config and the terminal.
    pub fn ui(&self) -> anyhow::Result<UiContext> {
        let config = self.config()?;
        Ok(UiContext::from_env(
            self.cli.format.as_deref(),
            self.cli.no_color || config.ui.no_color,
            self.cli.ascii || config.ui.ascii,
        ))
    }

    /// Export directory: `--export-dir`, then `[export] dir`, then the working directory.
    pub fn export_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.cli.export_dir {
            return Ok(dir.clone());
        }
        let config = self.config()?;
        Ok(config
            .export
            .dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_export_dir_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[export]\ndir = \"/from/config\"\n").unwrap();
        let config_arg = config_path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "tally",
            "--config",
            config_arg.as_str(),
            "--export-dir",
            "/from/flag",
            "tasks",
        ])
        .unwrap();
        let app = AppContext::new(&cli);
        assert_eq!(app.export_dir().unwrap(), PathBuf::from("/from/flag"));

        let cli = Cli::try_parse_from(["tally", "--config", config_arg.as_str(), "tasks"]).unwrap();
        let app = AppContext::new(&cli);
        assert_eq!(app.export_dir().unwrap(), PathBuf::from("/from/config"));
    }

    #[test]
    fn test_config_ascii_applies_to_ui() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[ui]\nascii = true\n").unwrap();
        let config_arg = config_path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["tally", "--config", config_arg.as_str(), "tasks"]).unwrap();
        let app = AppContext::new(&cli);
        assert!(!app.ui().unwrap().unicode);
    }
}
