use crate::core::ServiceState;
use std::collections::HashSet;

/// Appends every name in `incoming` that is not yet in the state, in incoming
/// order. Existing entries are never reordered or removed. Returns the names
/// that were appended.
pub fn merge_service_names(state: &mut ServiceState, incoming: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = state.service_names.iter().cloned().collect();
    let mut added = Vec::new();

    for name in incoming {
        if seen.insert(name.clone()) {
            state.service_names.push(name.clone());
            added.push(name.clone());
        }
    }

    added
}
