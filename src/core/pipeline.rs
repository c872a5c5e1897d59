use crate::core::catalog::{load_catalog, reconcile_catalog, save_catalog};
use crate::core::extractor::extract_service_names;
use crate::core::fetcher::{ensure_cached, FetchStatus};
use crate::core::merger::merge_service_names;
use crate::core::persister::{load_state, save_state};
use crate::core::{ConfigProvider, MergeOutcome, Pipeline, Storage};
use crate::utils::error::Result;
use reqwest::Client;
use std::path::Path;

pub struct HarvestPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> HarvestPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for HarvestPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let cache_path = self.config.cache_path();

        match ensure_cached(
            &self.client,
            &self.storage,
            self.config.source_url(),
            cache_path,
            self.config.refresh_policy(),
        )
        .await?
        {
            FetchStatus::Cached => tracing::info!("Using cached source document {}", cache_path),
            FetchStatus::Downloaded { bytes } => {
                tracing::info!("Downloaded {} bytes into {}", bytes, cache_path)
            }
        }

        let raw = self.storage.read_file(cache_path).await?;
        let names = extract_service_names(&raw, cache_path)?;
        tracing::debug!("Source document lists {} services", names.len());

        Ok(names)
    }

    async fn transform(&self, names: Vec<String>) -> Result<MergeOutcome> {
        let mut state = load_state(&self.storage, self.config.state_path()).await?;
        tracing::debug!(
            "Loaded {} persisted service names",
            state.service_names.len()
        );

        let added = merge_service_names(&mut state, &names);

        Ok(MergeOutcome {
            state,
            added,
            extracted: names.len(),
        })
    }

    async fn load(&self, outcome: &MergeOutcome) -> Result<String> {
        let state_path = self.config.state_path();
        save_state(&self.storage, state_path, &outcome.state).await?;

        if let Some(catalog_path) = self.config.catalog_path() {
            let existing = load_catalog(&self.storage, catalog_path).await?;
            let catalog = reconcile_catalog(
                &existing,
                &outcome.state.service_names,
                self.config.console_region(),
            );
            save_catalog(&self.storage, catalog_path, &catalog).await?;
        }

        Ok(Path::new(self.config.base_dir())
            .join(state_path)
            .display()
            .to_string())
    }
}
