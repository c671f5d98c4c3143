//! Field allow-list loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use oxide_filter_core::transpiler::FieldMap;
use tracing::debug;

/// Reads a JSON object of `field: column` pairs from `path`.
pub fn load_field_map(path: &Path) -> Result<FieldMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read field map {}", path.display()))?;
    let fields = FieldMap::from_json_str(&text)
        .with_context(|| format!("Invalid field map {}", path.display()))?;
    debug!(path = %path.display(), count = fields.len(), "loaded field map");
    Ok(fields)
}
