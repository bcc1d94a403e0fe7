use super::InsightErrorPolicy;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "reel-insights.toml";

const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the versioned graph API
    #[serde(default = "default_graph_api_base")]
    pub graph_api_base: String,

    /// Media items requested per listing page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Reaction to a failed insights request
    #[serde(default)]
    pub insight_errors: InsightErrorPolicy,

    /// Directory receiving exported files
    #[serde(default)]
    pub output_dir: Option<Utf8PathBuf>,

    /// Whether export file names carry the time of day
    #[serde(default = "default_true")]
    pub include_time_in_filename: bool,

    /// Whether to export the city breakdowns of the audience
    #[serde(default = "default_true")]
    pub demographics: bool,
}

fn default_graph_api_base() -> String {
    "https://graph.facebook.com/v20.0".to_string()
}

const fn default_page_size() -> u32 {
    25
}

const fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading reel-insights configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading reel-insights configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the page size is out of range or the API base is empty
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(app_err!("page_size must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size));
        }

        if self.graph_api_base.trim().is_empty() {
            return Err(app_err!("graph_api_base must not be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.graph_api_base, "https://graph.facebook.com/v20.0");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.insight_errors, InsightErrorPolicy::Abort);
        assert!(config.output_dir.is_none());
        assert!(config.include_time_in_filename);
        assert!(config.demographics);
    }

    #[test]
    fn test_embedded_matches_serde_defaults() {
        let empty: Config = toml::from_str("").unwrap();
        let embedded = Config::default();
        assert_eq!(empty.graph_api_base, embedded.graph_api_base);
        assert_eq!(empty.page_size, embedded.page_size);
        assert_eq!(empty.insight_errors, embedded.insight_errors);
        assert_eq!(empty.include_time_in_filename, embedded.include_time_in_filename);
        assert_eq!(empty.demographics, embedded.demographics);
    }

    #[test]
    fn test_validate_page_size_zero() {
        let config = Config { page_size: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_page_size_too_large() {
        let config = Config { page_size: 101, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_page_size_boundaries() {
        Config { page_size: 1, ..Config::default() }.validate().unwrap();
        Config { page_size: 100, ..Config::default() }.validate().unwrap();
    }

    #[test]
    fn test_validate_empty_base() {
        let config = Config {
            graph_api_base: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let (_guard, dir) = temp_dir();
        let config = Config::load(&dir, None).unwrap();
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_load_from_working_directory() {
        let (_guard, dir) = temp_dir();
        fs::write(dir.join(CONFIG_FILE_NAME), "page_size = 50\ninsight_errors = \"skip\"\n").unwrap();

        let config = Config::load(&dir, None).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.insight_errors, InsightErrorPolicy::Skip);
        assert!(config.demographics);
    }

    #[test]
    fn test_load_explicit_path() {
        let (_guard, dir) = temp_dir();
        let path = dir.join("custom.toml");
        fs::write(&path, "output_dir = \"/tmp/out\"\ndemographics = false\n").unwrap();

        let config = Config::load(&dir, Some(&path)).unwrap();
        assert_eq!(config.output_dir.as_deref(), Some(Utf8Path::new("/tmp/out")));
        assert!(!config.demographics);
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        let (_guard, dir) = temp_dir();
        let path = dir.join("absent.toml");
        assert!(Config::load(&dir, Some(&path)).is_err());
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let (_guard, dir) = temp_dir();
        fs::write(dir.join(CONFIG_FILE_NAME), "colour = \"red\"\n").unwrap();
        assert!(Config::load(&dir, None).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let (_guard, dir) = temp_dir();
        fs::write(dir.join(CONFIG_FILE_NAME), "page_size = 500\n").unwrap();
        assert!(Config::load(&dir, None).is_err());
    }

    #[test]
    fn test_save_default_round_trips() {
        let (_guard, dir) = temp_dir();
        let path = dir.join("saved.toml");
        Config::save_default(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);
        let config = Config::load(&dir, Some(&path)).unwrap();
        assert_eq!(config.page_size, 25);
    }
}
