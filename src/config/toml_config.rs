use crate::config::{DEFAULT_BASE_DIR, DEFAULT_CACHE_PATH, DEFAULT_CONSOLE_REGION, DEFAULT_STATE_PATH};
use crate::core::{ConfigProvider, RefreshPolicy};
use crate::utils::error::{HarvestError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_provider, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub storage: Option<StorageConfig>,
    pub catalog: Option<CatalogConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: String,
    pub refresh: Option<RefreshPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub base_dir: Option<String>,
    pub cache_path: Option<String>,
    pub state_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HarvestError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HarvestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_format(&self) -> Option<LogFormat> {
        self.logging.as_ref().and_then(|l| l.format)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    fn storage_field(&self, pick: impl Fn(&StorageConfig) -> Option<&String>) -> Option<&str> {
        self.storage.as_ref().and_then(pick).map(String::as_str)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_url(&self) -> &str {
        &self.source.url
    }

    fn base_dir(&self) -> &str {
        self.storage_field(|s| s.base_dir.as_ref())
            .unwrap_or(DEFAULT_BASE_DIR)
    }

    fn cache_path(&self) -> &str {
        self.storage_field(|s| s.cache_path.as_ref())
            .unwrap_or(DEFAULT_CACHE_PATH)
    }

    fn state_path(&self) -> &str {
        self.storage_field(|s| s.state_path.as_ref())
            .unwrap_or(DEFAULT_STATE_PATH)
    }

    fn refresh_policy(&self) -> RefreshPolicy {
        self.source.refresh.unwrap_or_default()
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().map(|c| c.path.as_str())
    }

    fn console_region(&self) -> &str {
        self.catalog
            .as_ref()
            .and_then(|c| c.region.as_deref())
            .unwrap_or(DEFAULT_CONSOLE_REGION)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
