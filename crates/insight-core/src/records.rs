use crate::error::{InsightError, Result};
use crate::types::Interaction;
use std::collections::HashSet;
use std::path::Path;

/// Load an interaction collection from a JSON array file.
///
/// The file holds the full record collection in the wire shape described in
/// [`crate::types`]; insertion order is preserved. Duplicate interaction ids
/// are tolerated but logged, since ids are expected to be unique within a
/// collection.
pub fn load_records(path: &Path) -> Result<Vec<Interaction>> {
    if !path.exists() {
        return Err(InsightError::Records(format!(
            "records file not found: {}",
            path.display()
        )));
    }

    let json = std::fs::read_to_string(path)?;
    let records: Vec<Interaction> = serde_json::from_str(&json)?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            tracing::warn!("duplicate interaction id in {}: {}", path.display(), record.id);
        }
    }

    tracing::debug!(
        "loaded {} interactions from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
