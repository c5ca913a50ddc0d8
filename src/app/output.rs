//! JSON output of a batch result.

use std::io::Write;

use anyhow::{Context, Result};

use crate::models::BatchResult;

/// Writes `result` as one JSON document followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_result<W: Write>(mut writer: W, result: &BatchResult, pretty: bool) -> Result<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut writer, result)
    } else {
        serde_json::to_writer(&mut writer, result)
    };
    written.context("Failed to write JSON result")?;
    writeln!(writer).context("Failed to write JSON result")?;
    Ok(())
}
