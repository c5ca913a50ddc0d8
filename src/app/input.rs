//! Hostname input reading.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Returns the hostname on `line`, or `None` for blank and `#` comment lines.
pub fn parse_hostname_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}

/// Reads hostnames, one per line, from a file or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a line cannot be read.
pub async fn read_hostnames(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        info!("Reading hostnames from stdin");
        read_hostname_lines(BufReader::new(tokio::io::stdin())).await
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        let hostnames = read_hostname_lines(BufReader::new(file)).await?;
        info!("Total hostnames in file: {}", hostnames.len());
        Ok(hostnames)
    }
}

async fn read_hostname_lines<R: AsyncBufRead + Unpin>(reader: R) -> Result<Vec<String>> {
    let mut lines = reader.lines();
    let mut hostnames = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read line from input")?
    {
        if let Some(hostname) = parse_hostname_line(&line) {
            hostnames.push(hostname.to_string());
        }
    }
    Ok(hostnames)
}

/// Combines positional hostnames with those read from `file`, positional first.
///
/// # Errors
///
/// Propagates errors from [`read_hostnames`].
pub async fn collect_hostnames(positional: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut hostnames = positional.to_vec();
    if let Some(path) = file {
        hostnames.extend(read_hostnames(path).await?);
    }
    Ok(hostnames)
}
