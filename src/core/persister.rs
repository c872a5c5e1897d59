use crate::core::{ServiceState, Storage};
use crate::utils::error::Result;

/// Reads the persisted state. A missing or blank file is an empty state.
pub async fn load_state<S: Storage>(storage: &S, path: &str) -> Result<ServiceState> {
    if !storage.exists(path).await? {
        tracing::debug!("No state file at {}, starting empty", path);
        return Ok(ServiceState::default());
    }

    let raw = storage.read_file(path).await?;
    parse_state(&raw)
}

pub fn parse_state(raw: &[u8]) -> Result<ServiceState> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(ServiceState::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_slice(raw)?;
    if value.is_null() {
        return Ok(ServiceState::default());
    }

    Ok(serde_yaml::from_value(value)?)
}

pub fn render_state(state: &ServiceState) -> Result<String> {
    Ok(serde_yaml::to_string(state)?)
}

/// Overwrites `path` with the YAML form of `state`.
pub async fn save_state<S: Storage>(storage: &S, path: &str, state: &ServiceState) -> Result<()> {
    let rendered = render_state(state)?;
    storage.write_file(path, rendered.as_bytes()).await?;
    tracing::debug!(
        "Persisted {} service names to {}",
        state.service_names.len(),
        path
    );
    Ok(())
}

/// Persisted service names in sorted order.
pub async fn list_services<S: Storage>(storage: &S, path: &str) -> Result<Vec<String>> {
    let mut names = load_state(storage, path).await?.service_names;
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::MockStorage;
    use crate::utils::error::HarvestError;

    #[tokio::test]
    async fn test_missing_state_is_empty() {
        let storage = MockStorage::new();
        let state = load_state(&storage, "endpoints.yaml").await.unwrap();
        assert_eq!(state, ServiceState::default());
    }

    #[tokio::test]
    async fn test_blank_state_is_empty() {
        let storage = MockStorage::with_file("endpoints.yaml", b"\n  \n");
        let state = load_state(&storage, "endpoints.yaml").await.unwrap();
        assert!(state.service_names.is_empty());
    }

    #[test]
    fn test_parse_state_without_service_names_key() {
        let state = parse_state(b"owner: platform-team\n").unwrap();
        assert!(state.service_names.is_empty());
        assert_eq!(
            state.extra.get("owner"),
            Some(&serde_yaml::Value::String("platform-team".to_string()))
        );
    }

    #[test]
    fn test_parse_state_rejects_non_mapping() {
        let err = parse_state(b"- s3\n- ec2\n").unwrap_err();
        assert!(matches!(err, HarvestError::StateError(_)));
    }

    #[tokio::test]
    async fn test_save_then_load_keeps_extra_keys() {
        let storage = MockStorage::new();
        let mut state = ServiceState::with_names(["s3", "ec2"]);
        state.extra.insert(
            "owner".to_string(),
            serde_yaml::Value::String("platform-team".to_string()),
        );

        save_state(&storage, "endpoints.yaml", &state).await.unwrap();
        let loaded = load_state(&storage, "endpoints.yaml").await.unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_render_state_is_block_yaml() {
        let rendered = render_state(&ServiceState::with_names(["s3", "ec2"])).unwrap();
        assert_eq!(rendered, "service_names:\n- s3\n- ec2\n");
    }

    #[tokio::test]
    async fn test_list_services_is_sorted() {
        let storage = MockStorage::with_file(
            "endpoints.yaml",
            b"service_names:\n- s3\n- ec2\n- athena\n",
        );
        let names = list_services(&storage, "endpoints.yaml").await.unwrap();
        assert_eq!(names, vec!["athena", "ec2", "s3"]);
    }
}
