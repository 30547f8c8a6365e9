//! Configuration management for the CV extractor

use crate::error::{CvExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
pub const INPUT_DIR_ENV: &str = "CV_FOLDER_PATH";
pub const OUTPUT_PATH_ENV: &str = "OUTPUT_CSV_PATH";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
    /// Input folder; only ever supplied through the environment or the CLI.
    #[serde(skip)]
    pub input_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Request timeout; unset means the service default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionConfig {
    pub max_input_chars: usize,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.deepseek.com".to_string(),
                model: "deepseek-chat".to_string(),
                api_key_env: DEFAULT_API_KEY_ENV.to_string(),
                timeout_secs: None,
            },
            extraction: ExtractionConfig {
                max_input_chars: 4000,
                max_tokens: 1024,
                temperature: 0.3,
            },
            output: OutputConfig {
                path: PathBuf::from("./extracted_data.csv"),
                format: OutputFormat::Csv,
                color_output: true,
            },
            input_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CvExtractorError::Configuration(format!("Failed to parse config {}: {}", path.display(), e)))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CvExtractorError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-extractor")
            .join("config.toml")
    }

    /// Layer `.env` and process environment values on top of the file config.
    pub fn apply_env(&mut self) {
        dotenvy::dotenv().ok();
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(INPUT_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.input_dir = Some(PathBuf::from(dir));
        }
        if let Some(path) = lookup(OUTPUT_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            self.output.path = PathBuf::from(path);
        }
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CvExtractorError::MissingCredential(self.api.api_key_env.clone()))
    }

    /// Switch the output format, renaming the output file when it carries the old format's extension.
    pub fn set_output_format(&mut self, format: OutputFormat) {
        let previous = self.output.format;
        self.output.format = format;
        if previous == format {
            return;
        }

        let has_previous_extension = self.output.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(previous.extension()));
        if has_previous_extension {
            self.output.path.set_extension(format.extension());
        }
    }

    pub fn completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.api.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.extraction.max_input_chars, 4000);
        assert_eq!(config.extraction.max_tokens, 1024);
        assert!((config.extraction.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.api.model, "deepseek-chat");
        assert_eq!(config.output.path, PathBuf::from("./extracted_data.csv"));
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.api.timeout_secs = Some(30);
        config.output.format = OutputFormat::Json;

        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("format = \"json\""));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CvExtractorError::Configuration(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (INPUT_DIR_ENV, "/data/cvs"),
            (OUTPUT_PATH_ENV, "/tmp/out.csv"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.input_dir, Some(PathBuf::from("/data/cvs")));
        assert_eq!(config.output.path, PathBuf::from("/tmp/out.csv"));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env_from(|_| Some("  ".to_string()));

        assert!(config.input_dir.is_none());
        assert_eq!(config.output.path, PathBuf::from("./extracted_data.csv"));
    }

    #[test]
    fn test_missing_credential() {
        let mut config = Config::default();
        config.api.api_key_env = "CV_EXTRACTOR_TEST_KEY_THAT_IS_NEVER_SET".to_string();

        let err = config.api_key().unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, CvExtractorError::MissingCredential(_)));
    }

    #[test]
    fn test_output_format_switch_renames_default_path() {
        let mut config = Config::default();
        config.set_output_format(OutputFormat::Json);

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.path, PathBuf::from("./extracted_data.json"));
    }

    #[test]
    fn test_output_format_switch_keeps_unrelated_extension() {
        let mut config = Config::default();
        config.output.path = PathBuf::from("/tmp/cvs.out");
        config.set_output_format(OutputFormat::Json);

        assert_eq!(config.output.path, PathBuf::from("/tmp/cvs.out"));
    }

    #[test]
    fn test_completions_endpoint() {
        let mut config = Config::default();
        config.api.base_url = "http://localhost:8080/".to_string();
        assert_eq!(config.completions_endpoint(), "http://localhost:8080/chat/completions");
    }
}
