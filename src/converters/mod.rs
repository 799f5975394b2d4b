//! JSON/YAML serialization helpers
//!
//! Thin pass-throughs over `serde_json` and `serde_yaml`, plus file variants
//! that tag failures with the offending path.

use crate::error::{Result, UtilError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Parse JSON bytes
pub fn unmarshal_json<T: DeserializeOwned>(content: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(content)?)
}

/// Parse YAML bytes (JSON documents are accepted too)
pub fn unmarshal_yaml<T: DeserializeOwned>(content: &[u8]) -> Result<T> {
    Ok(serde_yaml::from_slice(content)?)
}

/// Read `path` and parse it as YAML
pub fn unmarshal_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = read_file(path)?;
    serde_yaml::from_slice(&content).map_err(|e| UtilError::in_file(path, e))
}

/// Read `path` and parse it as JSON
pub fn unmarshal_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = read_file(path)?;
    serde_json::from_slice(&content).map_err(|e| UtilError::in_file(path, e))
}

/// Serialize to JSON; `pretty` indents with two spaces.
///
/// Output ends with a newline either way.
pub fn marshal_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>> {
    let mut out = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    out.push(b'\n');
    Ok(out)
}

/// Pretty JSON text, or an empty string if `value` cannot be serialized
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> String {
    match marshal_json(value, true) {
        Ok(bytes) => String::from_utf8(bytes).unwrap_or_default(),
        Err(err) => {
            warn!(error = %err, "JSON serialization failed");
            String::new()
        }
    }
}

/// Serialize to YAML and write to `path`
pub fn marshal_to_yaml_file<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let data = serde_yaml::to_string(value)?;
    write_file(path.as_ref(), data.as_bytes())
}

/// Serialize to compact JSON and write to `path`
pub fn marshal_to_json_file<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let data = marshal_json(value, false)?;
    write_file(path.as_ref(), &data)
}

/// Serialize to indented JSON and write to `path`
pub fn marshal_to_json_pretty_file<T: Serialize + ?Sized>(
    value: &T,
    path: impl AsRef<Path>,
) -> Result<()> {
    let data = marshal_json(value, true)?;
    write_file(path.as_ref(), &data)
}

/// Drain `src` and parse the bytes as JSON
pub fn read_to<R: Read, T: DeserializeOwned>(mut src: R) -> Result<T> {
    let mut buf = Vec::new();
    src.read_to_end(&mut buf)
        .map_err(|e| UtilError::io("<reader>", e))?;
    unmarshal_json(&buf)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    debug!(path = %path.display(), "reading file");
    std::fs::read(path).map_err(|e| UtilError::in_file(path, e))
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    debug!(path = %path.display(), bytes = data.len(), "writing file");
    std::fs::write(path, data).map_err(|e| UtilError::io(path, e))
}
