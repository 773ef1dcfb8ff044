use std::io::Write;
use thiserror::Error as ThisError;

use crate::domain::value_objects::SdkVersion;

#[derive(ThisError, Debug)]
pub enum OutputError {
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render versions as a two-space indented JSON array with a trailing newline
pub fn render_versions_json(versions: &[SdkVersion]) -> Result<Vec<u8>, OutputError> {
    let mut buf = serde_json::to_vec_pretty(versions)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Render first, then write, so a failed encode leaves `writer` untouched
pub fn write_versions_json<W: Write>(
    writer: &mut W,
    versions: &[SdkVersion],
) -> Result<(), OutputError> {
    let buf = render_versions_json(versions)?;
    writer.write_all(&buf)?;
    writer.flush()?;
    Ok(())
}
