//! # File I/O Module
//!
//! Reading and rewriting target files.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the complete file as raw bytes.
  pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("could not read file {:?}", path.display().to_string()))
  }

  /// Returns `original` with `header` in front of it.
  pub fn prepend(header: &str, original: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(header.len() + original.len());
    content.extend_from_slice(header.as_bytes());
    content.extend_from_slice(original);
    content
  }

  /// Writes `content` to `path`, replacing what was there.
  pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("could not write file {:?}", path.display().to_string()))
  }
}
