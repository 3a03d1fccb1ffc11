//! Export options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::level::SERVER_BLOCK_LIMIT;
use crate::util::Result;

/// How a level is written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Appended to the export path, without the dot.
    pub extension: String,
    /// Indent the document.
    pub pretty: bool,
    pub server_block_limit: usize,
    /// Warn when the level has more blocks than `server_block_limit`.
    pub warn_block_limit: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            extension: "bopjson".to_string(),
            pretty: false,
            server_block_limit: SERVER_BLOCK_LIMIT,
            warn_block_limit: true,
        }
    }
}

impl ExportOptions {
    /// Parse options from JSON. Missing keys keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
