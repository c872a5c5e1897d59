use crate::core::{ConsoleCatalog, ConsoleLink, Storage};
use crate::utils::error::Result;

pub fn console_url(region: &str, service: &str) -> String {
    format!(
        "https://{region}.console.aws.amazon.com/{service}/home?region={region}#",
        region = region,
        service = service
    )
}

/// Builds a catalog with one entry per name. Links already present in
/// `existing` are kept as stored; new names get the templated console URL.
pub fn reconcile_catalog(existing: &ConsoleCatalog, names: &[String], region: &str) -> ConsoleCatalog {
    let services = names
        .iter()
        .map(|name| {
            let link = existing
                .services
                .get(name)
                .cloned()
                .unwrap_or_else(|| ConsoleLink {
                    console: console_url(region, name),
                });
            (name.clone(), link)
        })
        .collect();

    ConsoleCatalog { services }
}

pub async fn load_catalog<S: Storage>(storage: &S, path: &str) -> Result<ConsoleCatalog> {
    if !storage.exists(path).await? {
        return Ok(ConsoleCatalog::default());
    }

    let raw = storage.read_file(path).await?;
    Ok(serde_json::from_slice(&raw)?)
}

pub async fn save_catalog<S: Storage>(storage: &S, path: &str, catalog: &ConsoleCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    storage.write_file(path, json.as_bytes()).await?;
    tracing::debug!(
        "Wrote console catalog with {} services to {}",
        catalog.services.len(),
        path
    );
    Ok(())
}
