use crate::utils::error::{HarvestError, Result};
use serde_json::Value;

/// Returns the keys of `partitions[0].services` in the order the document
/// declares them.
pub fn extract_service_names(raw: &[u8], origin: &str) -> Result<Vec<String>> {
    let document: Value = serde_json::from_slice(raw).map_err(|source| HarvestError::ParseError {
        path: origin.to_string(),
        source,
    })?;

    let partitions = document
        .get("partitions")
        .and_then(Value::as_array)
        .ok_or_else(|| HarvestError::structure("partitions", "expected an array"))?;

    let partition = partitions
        .first()
        .ok_or_else(|| HarvestError::structure("partitions[0]", "partitions list is empty"))?;

    if !partition.is_object() {
        return Err(HarvestError::structure("partitions[0]", "expected an object"));
    }

    let services = partition
        .get("services")
        .and_then(Value::as_object)
        .ok_or_else(|| HarvestError::structure("partitions[0].services", "expected an object"))?;

    Ok(services.keys().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_document_order() {
        let raw = br#"{
            "partitions": [
                {"partition": "aws", "services": {"s3": {}, "ec2": {}, "a4b": {}, "dynamodb": {}}},
                {"partition": "aws-cn", "services": {"iam": {}}}
            ]
        }"#;

        let names = extract_service_names(raw, "endpoints.json").unwrap();
        assert_eq!(names, vec!["s3", "ec2", "a4b", "dynamodb"]);
    }

    #[test]
    fn test_empty_services_yields_no_names() {
        let raw = br#"{"partitions": [{"services": {}}]}"#;
        assert!(extract_service_names(raw, "endpoints.json").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = extract_service_names(b"{not json", "endpoints.json").unwrap_err();
        match err {
            HarvestError::ParseError { path, .. } => assert_eq!(path, "endpoints.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_partitions_is_structure_error() {
        let err = extract_service_names(br#"{"version": 3}"#, "endpoints.json").unwrap_err();
        assert!(matches!(
            err,
            HarvestError::StructureError { ref location, .. } if location == "partitions"
        ));
    }

    #[test]
    fn test_empty_partitions_is_structure_error() {
        let err = extract_service_names(br#"{"partitions": []}"#, "endpoints.json").unwrap_err();
        assert!(matches!(
            err,
            HarvestError::StructureError { ref location, .. } if location == "partitions[0]"
        ));
    }

    #[test]
    fn test_missing_services_is_structure_error() {
        let raw = br#"{"partitions": [{"partition": "aws"}]}"#;
        let err = extract_service_names(raw, "endpoints.json").unwrap_err();
        assert!(matches!(
            err,
            HarvestError::StructureError { ref location, .. } if location == "partitions[0].services"
        ));
    }

    #[test]
    fn test_services_must_be_an_object() {
        let raw = br#"{"partitions": [{"services": ["s3"]}]}"#;
        assert!(matches!(
            extract_service_names(raw, "endpoints.json"),
            Err(HarvestError::StructureError { .. })
        ));
    }
}
