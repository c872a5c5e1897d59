use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted mapping. `service_names` is the only key this tool manages; any
/// other top-level keys are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceState {
    #[serde(default)]
    pub service_names: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ServiceState {
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            service_names: names.into_iter().map(Into::into).collect(),
            extra: BTreeMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.service_names.iter().any(|existing| existing == name)
    }
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub state: ServiceState,
    pub added: Vec<String>,
    pub extracted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleLink {
    pub console: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleCatalog {
    #[serde(default)]
    pub services: BTreeMap<String, ConsoleLink>,
}

/// When the cached source document is (re)downloaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum RefreshPolicy {
    /// Download only when no cache file exists. The cache is never refreshed.
    #[default]
    SkipIfPresent,
    /// Download on every run, replacing the cache.
    Always,
}
