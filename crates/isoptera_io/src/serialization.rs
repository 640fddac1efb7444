//! JSON helpers and transition table files.
//!
//! A table file holds a [`TableSpec`]:
//!
//! ```json
//! { "name": "langton's ant", "encoding": "bit_flag", "states": [[[1, 2, 0], [0, 8, 0]]] }
//! ```

use crate::error::{IoError, Result};
use isoptera_core::TransitionTable;
use isoptera_data::TableSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }

    serde_json::from_str(json)
        .map_err(|e| IoError::serialization(format!("JSON deserialization failed: {}", e)))
}

pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = to_json_pretty(data)?;
    std::fs::write(&path, json).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", path.as_ref()))
    })?;
    Ok(())
}

pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path.as_ref()))
    })?;
    from_json(&json)
}

/// Reads a table file and checks that it decodes into a valid table.
pub fn read_table_spec<P: AsRef<Path>>(path: P) -> Result<TableSpec> {
    let spec: TableSpec = read_json_file(&path)?;
    let table = TransitionTable::from_spec(&spec).map_err(|e| {
        IoError::from(e).with_context(format!("validating table {:?}", path.as_ref()))
    })?;
    if !table.contains_state(spec.start) {
        return Err(IoError::validation(format!(
            "start state {} is outside the {} states of {:?}",
            spec.start,
            table.state_count(),
            path.as_ref()
        )));
    }
    tracing::debug!(
        path = ?path.as_ref(),
        states = table.state_count(),
        fingerprint = %table.fingerprint(),
        "Loaded transition table"
    );
    Ok(spec)
}

pub fn write_table_spec<P: AsRef<Path>>(spec: &TableSpec, path: P) -> Result<()> {
    write_json_file(spec, path)
}
