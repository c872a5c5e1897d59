pub mod cli;
pub mod toml_config;

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/aws/aws-sdk-net/master/sdk/src/Core/endpoints.json";
pub const DEFAULT_BASE_DIR: &str = ".";
pub const DEFAULT_CACHE_PATH: &str = "endpoints.json";
pub const DEFAULT_STATE_PATH: &str = "endpoints.yaml";
pub const DEFAULT_CONSOLE_REGION: &str = "us-west-1";

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, RefreshPolicy};
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_provider, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "service-harvest")]
#[command(about = "Collects AWS service names from the SDK endpoints document into a local list")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Directory the cache, state and catalog paths are resolved against
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: String,

    #[arg(long, default_value = DEFAULT_CACHE_PATH)]
    pub cache_path: String,

    #[arg(long, default_value = DEFAULT_STATE_PATH)]
    pub state_path: String,

    /// When to download the source document [default: skip-if-present]
    #[arg(long, value_enum)]
    pub refresh: Option<RefreshPolicy>,

    /// Also maintain a JSON catalog of console links at this path
    #[arg(long)]
    pub catalog_path: Option<String>,

    #[arg(long, default_value = DEFAULT_CONSOLE_REGION)]
    pub console_region: String,

    /// Read settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    /// Print the persisted service names, sorted, and exit
    #[arg(short = 's', long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn base_dir(&self) -> &str {
        &self.base_dir
    }

    fn cache_path(&self) -> &str {
        &self.cache_path
    }

    fn state_path(&self) -> &str {
        &self.state_path
    }

    fn refresh_policy(&self) -> RefreshPolicy {
        self.refresh.unwrap_or_default()
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog_path.as_deref()
    }

    fn console_region(&self) -> &str {
        &self.console_region
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_provider(self)
    }
}
