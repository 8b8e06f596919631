//! Line lists and catalogs in the host's JSON shape.

use crate::error::{LinegridError, Result};
use crate::lines::{Catalog, LineRecord};
use std::path::Path;

const MAX_INPUT_FILE_BYTES: u64 = 16 * 1_048_576; // 16 MiB

fn read_input_file(path: &Path) -> Result<String> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_INPUT_FILE_BYTES {
        return Err(LinegridError::FileTooLarge {
            path: path.display().to_string(),
            size: meta.len(),
            max: MAX_INPUT_FILE_BYTES,
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Parse a JSON array of line objects.
pub fn parse_lines(json: &str) -> Result<Vec<LineRecord>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_lines(path: &Path) -> Result<Vec<LineRecord>> {
    let lines = parse_lines(&read_input_file(path)?)?;
    log::info!("loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Parse `{ "items": [...], "units": [...] }`.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog = parse_catalog(&read_input_file(path)?)?;
    log::info!(
        "loaded catalog from {} ({} items, {} units)",
        path.display(),
        catalog.item_count(),
        catalog.unit_count()
    );
    Ok(catalog)
}
