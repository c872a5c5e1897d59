use crate::core::{RefreshPolicy, Storage};
use crate::utils::error::{HarvestError, Result};
use reqwest::Client;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// The cache file was already present and left alone.
    Cached,
    /// The source was downloaded and written to the cache file.
    Downloaded { bytes: usize },
}

/// Makes sure `cache_path` holds the source document, downloading it when the
/// policy asks for it. The body is read in full before anything is written, so
/// a failed download never leaves a cache file behind.
pub async fn ensure_cached<S: Storage>(
    client: &Client,
    storage: &S,
    url: &str,
    cache_path: &str,
    policy: RefreshPolicy,
) -> Result<FetchStatus> {
    if policy == RefreshPolicy::SkipIfPresent && storage.exists(cache_path).await? {
        tracing::debug!("Cache file {} present, skipping download", cache_path);
        return Ok(FetchStatus::Cached);
    }

    tracing::info!("Downloading source document from {}", url);
    let response = client.get(url).send().await?;
    let status = response.status();
    tracing::debug!("Source response status: {}", status);

    if !status.is_success() {
        return Err(HarvestError::FetchError {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await?;
    storage.write_file(cache_path, &body).await?;
    tracing::debug!("Wrote {} bytes to {}", body.len(), cache_path);

    Ok(FetchStatus::Downloaded { bytes: body.len() })
}
