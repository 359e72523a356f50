//! # Reference Module
//!
//! Builds the canonical reference header that files are checked against.
//!
//! A project either pins its reference in a `.license.header` file, or the
//! reference is generated from the license template, wrapped to the
//! configured width.
//!
//! ## Example
//!
//! ```rust
//! use license_header::reference::{HeaderData, render_reference, DEFAULT_WIDTH};
//! use license_header::spdx::LicenseId;
//!
//! let data = HeaderData {
//!   year: 2026,
//!   copyright: "Quint Daenen".to_string(),
//!   project: "demo".to_string(),
//! };
//! let reference = render_reference(LicenseId::Mpl2, &data, DEFAULT_WIDTH);
//! assert!(reference.starts_with("Copyright (c) 2026 Quint Daenen.\n"));
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::spdx::LicenseId;
use crate::verbose_log;
use crate::wrap::wrap;

/// Name of the pinned reference header file.
pub const LICENSE_HEADER_PATH: &str = ".license.header";

/// Line width of the reference text, leaving room for a `"// "` prefix in an
/// 80 column file.
pub const DEFAULT_WIDTH: usize = 80 - "// ".len();

/// Data used to fill out the header template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderData {
  /// The copyright year
  pub year: i32,
  /// The copyright holder
  pub copyright: String,
  /// The project name
  pub project: String,
}

impl HeaderData {
  /// Builds header data when both the holder and the project are known.
  pub fn from_parts(year: i32, copyright: Option<String>, project: Option<String>) -> Option<Self> {
    match (copyright, project) {
      (Some(copyright), Some(project)) if !copyright.is_empty() && !project.is_empty() => Some(Self {
        year,
        copyright,
        project,
      }),
      _ => None,
    }
  }
}

/// Renders and wraps the header template for `license`.
pub fn render_reference(license: LicenseId, data: &HeaderData, width: usize) -> String {
  verbose_log!("Rendering {} header for {} ({})", license, data.project, data.year);
  wrap(license.header(data.year, &data.copyright, &data.project).trim(), width)
}

/// Resolves the reference header for a project rooted at `root`.
///
/// A regular `.license.header` file in `root` wins. Otherwise the reference
/// is rendered from `data`, which must then be present.
///
/// # Errors
///
/// Returns an error if the pinned file cannot be read, if `.license.header`
/// is a directory, or if there is neither a pinned file nor header data.
pub fn resolve_reference(root: &Path, license: LicenseId, data: Option<&HeaderData>, width: usize) -> Result<String> {
  let path = root.join(LICENSE_HEADER_PATH);

  match fs::metadata(&path) {
    Ok(metadata) if metadata.is_dir() => bail!("{:?} not found", path.display().to_string()),
    Ok(_) => {
      verbose_log!("Using pinned reference header: {}", path.display());
      fs::read_to_string(&path).with_context(|| format!("could not open file {:?}", path.display().to_string()))
    }
    Err(err) => match data {
      Some(data) => Ok(render_reference(license, data, width)),
      None => Err(err).with_context(|| {
        format!(
          "{:?} not found and no copyright holder (-c) and project name (-n) given",
          path.display().to_string()
        )
      }),
    },
  }
}
