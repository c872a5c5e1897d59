pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{etl::HarvestEngine, etl::RunReport, pipeline::HarvestPipeline};
pub use domain::model::{RefreshPolicy, ServiceState};
pub use utils::error::{HarvestError, Result};
