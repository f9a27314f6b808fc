// src/platform.rs - Board detection from the device-tree compatible list
use std::path::Path;

use crate::board::{BoardSpec, BOARDS};
use crate::error::{ResolveError, Result};

/// Read `/proc/device-tree/compatible` (or a stand-in) into its entries.
pub fn read_compatibles(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read(path).map_err(|source| ResolveError::CompatibleUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_compatibles(&raw))
}

/// Split a NUL-separated compatible property. Empty segments are dropped.
pub fn parse_compatibles(raw: &[u8]) -> Vec<String> {
    raw.split(|b| *b == 0)
        .filter(|s| !s.is_empty())
        .map(|s| String::from_utf8_lossy(s).into_owned())
        .collect()
}

/// First board in `boards` whose compatible set intersects `compatibles`.
pub fn identify_in<'a>(boards: &'a [BoardSpec], compatibles: &[String]) -> Result<&'a BoardSpec> {
    boards
        .iter()
        .find(|board| {
            board
                .compatibles
                .iter()
                .any(|c| compatibles.iter().any(|have| have == c))
        })
        .ok_or_else(|| ResolveError::PlatformUnidentified {
            compatibles: compatibles.to_vec(),
        })
}

/// Identify the running board against the compiled-in registry.
pub fn identify(compatibles: &[String]) -> Result<&'static BoardSpec> {
    let board = identify_in(&BOARDS, compatibles)?;
    tracing::info!("Detected board {}", board.model);
    Ok(board)
}
