//! Configuration for the `javalex` binary.
//!
//! Settings are read from a TOML file. Every field has a default, so an empty
//! or partial file is valid:
//!
//! ```toml
//! color = "never"
//! write_report = true
//! report_extension = "tokens.txt"
//! source_dir = "samples"
//! deny_errors = false
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::errors::{AppError, Result};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "javalex.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub color: ColorMode,

    /// Write the plain-text report next to the source file.
    #[serde(default = "default_true")]
    pub write_report: bool,

    /// Appended to the source file name to name the report.
    #[serde(default = "default_report_extension")]
    pub report_extension: String,

    /// Directory that interactively entered file names are resolved against.
    #[serde(default)]
    pub source_dir: Option<PathBuf>,

    /// Fail with a non-zero exit status when any error token was produced.
    #[serde(default)]
    pub deny_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: ColorMode::default(),
            write_report: true,
            report_extension: default_report_extension(),
            source_dir: None,
            deny_errors: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_report_extension() -> String {
    String::from("tokens.txt")
}

impl Config {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Loads `explicit` if given (it must exist), otherwise `javalex.toml`
    /// from the working directory when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            debug!(path = %local.display(), "loading configuration");
            return Self::from_file(local);
        }

        Ok(Config::default())
    }

    /// Path of the report written for `source`: the source path with the
    /// report extension appended, e.g. `Main.java.tokens.txt`.
    pub fn report_path(&self, source: &Path) -> PathBuf {
        let mut name = source.as_os_str().to_owned();
        name.push(".");
        name.push(&self.report_extension);
        PathBuf::from(name)
    }

    pub fn resolve_source(&self, name: &str) -> PathBuf {
        match &self.source_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{ColorMode, Config};

    #[test]
    fn test_defaults_from_empty_file() {
        let config = Config::from_toml("", Path::new("javalex.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.write_report);
        assert_eq!(config.report_extension, "tokens.txt");
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_partial_file() {
        let text = "color = \"never\"\ndeny_errors = true\nsource_dir = \"samples\"\n";
        let config = Config::from_toml(text, Path::new("javalex.toml")).unwrap();

        assert_eq!(config.color, ColorMode::Never);
        assert!(config.deny_errors);
        assert!(config.write_report);
        assert_eq!(config.resolve_source("A.java"), PathBuf::from("samples").join("A.java"));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = Config::from_toml("color = \"sometimes\"", Path::new("bad.toml"));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/definitely/not/here/javalex.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn test_report_path() {
        let config = Config::default();

        assert_eq!(
            config.report_path(Path::new("src/Main.java")),
            PathBuf::from("src/Main.java.tokens.txt")
        );
    }

    #[test]
    fn test_color_mode() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }
}
