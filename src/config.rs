//! Configuration loading: defaults, optional file, then CODEWEAVER_* env
//! overlay with `__` as the nested-key separator.

use crate::logging::LoggingConfig;
use ::config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for the workspace model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Workspace defaults applied when creating new projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Name given to a project created without one.
    #[serde(default = "default_workspace_name")]
    pub default_name: String,

    /// Starter languages preselected in the new-project flow.
    #[serde(default = "default_starter_languages")]
    pub starter_languages: Vec<String>,
}

fn default_workspace_name() -> String {
    "untitled-project".to_string()
}

fn default_starter_languages() -> Vec<String> {
    vec!["html".to_string(), "css".to_string(), "js".to_string()]
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            default_name: default_workspace_name(),
            starter_languages: default_starter_languages(),
        }
    }
}

impl IdeConfig {
    /// Load configuration. Precedence: defaults (lowest), optional file,
    /// environment (highest).
    pub fn load(file: Option<&Path>) -> Result<IdeConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }
        let builder = builder.add_source(
            Environment::with_prefix("CODEWEAVER")
                .separator("__")
                .try_parsing(true),
        );
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = IdeConfig::load(None).unwrap();
        assert_eq!(config.workspace.default_name, "untitled-project");
        assert_eq!(config.workspace.starter_languages, vec!["html", "css", "js"]);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codeweaver.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[workspace]\ndefault_name = \"scratch\"\nstarter_languages = [\"rust\"]\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = IdeConfig::load(Some(&path)).unwrap();
        assert_eq!(config.workspace.default_name, "scratch");
        assert_eq!(config.workspace.starter_languages, vec!["rust"]);
        assert_eq!(config.logging.level, "debug");
    }
}
