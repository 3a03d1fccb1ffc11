//! `.bopjson` writer.
//!
//! - [`encode`] - typed value encoding (`Color8`, `Vector3F32`, arrays)
//! - [`level_document`] - level to JSON document
//! - [`ExportOptions`] - extension, formatting and limits
//! - atomic file output for [`Level::export`]

pub mod encode;
mod document;
mod options;
mod stream;

pub use document::level_document;
pub use encode::Encode;
pub use options::ExportOptions;
pub use stream::write_atomic;

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde_json::Value;
use tracing::{info, info_span, warn};

use crate::level::Level;
use crate::util::Result;

/// `path` with `.extension` appended (not substituted).
fn with_extension(path: &Path, extension: &str) -> PathBuf {
    if extension.is_empty() {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

impl Level {
    /// The level as a JSON document.
    pub fn to_document(&self) -> Result<Value> {
        level_document(self)
    }

    /// The level as compact JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_document()?)?)
    }

    /// Write the level to `path` + `.bopjson`, replacing any existing file.
    /// Returns the path written.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        self.export_with(path, &ExportOptions::default())
    }

    pub fn export_with(&self, path: impl AsRef<Path>, options: &ExportOptions) -> Result<PathBuf> {
        let start = Instant::now();
        let _span = info_span!("export", level = %self.name).entered();

        if options.warn_block_limit && self.len() > options.server_block_limit {
            warn!(
                blocks = self.len(),
                limit = options.server_block_limit,
                "level exceeds the server block limit; it will play offline but cannot be published"
            );
        }

        let doc = self.to_document()?;
        let bytes = if options.pretty {
            serde_json::to_vec_pretty(&doc)?
        } else {
            serde_json::to_vec(&doc)?
        };
        let target = with_extension(path.as_ref(), &options.extension);
        write_atomic(&target, &bytes)?;

        info!(
            path = %target.display(),
            blocks = self.len(),
            bytes = bytes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "level exported"
        );
        Ok(target)
    }
}

#[cfg(test)]
mod tests;
