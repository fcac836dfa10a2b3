//! Presentation of the thread JSON on disk.
//!
//! Documents are written with keys sorted at every depth and a two-space
//! indent so successive snapshots of a thread diff cleanly. Key order comes
//! from `serde_json::Map`, which is ordered while `preserve_order` is off.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::error::Error;

pub fn to_pretty_json(value: &Value) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` to `path`. Returns false when the file already held the
/// exact same bytes and was left untouched.
pub async fn write_json(path: &Path, value: &Value) -> Result<bool, Error> {
    let text = to_pretty_json(value)?;
    match tokio::fs::read(path).await {
        Ok(existing) if existing == text.as_bytes() => {
            debug!("{} unchanged", path.display());
            return Ok(false);
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    tokio::fs::write(path, text).await?;
    Ok(true)
}
