//! # SPDX Module
//!
//! The catalogue of supported licenses: identifiers, header templates, the
//! license files a project must ship, and the [`LicenseStore`] seam through
//! which full license texts are looked up.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use thiserror::Error;

use crate::verbose_log;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpdxError {
  #[error("unsupported SPDX License Identifier: {0:?}")]
  Unsupported(String),
}

/// A supported SPDX license identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LicenseId {
  Gpl2,
  Gpl2Later,
  Gpl3,
  Gpl3Later,
  Lgpl21,
  Lgpl21Later,
  Lgpl3,
  Lgpl3Later,
  Agpl3,
  Agpl3Later,
  #[default]
  Mpl2,
}

impl LicenseId {
  pub const ALL: [Self; 11] = [
    Self::Gpl2,
    Self::Gpl2Later,
    Self::Gpl3,
    Self::Gpl3Later,
    Self::Lgpl21,
    Self::Lgpl21Later,
    Self::Lgpl3,
    Self::Lgpl3Later,
    Self::Agpl3,
    Self::Agpl3Later,
    Self::Mpl2,
  ];

  /// The SPDX short identifier, e.g. `GPL-3.0-or-later`.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Gpl2 => "GPL-2.0-only",
      Self::Gpl2Later => "GPL-2.0-or-later",
      Self::Gpl3 => "GPL-3.0-only",
      Self::Gpl3Later => "GPL-3.0-or-later",
      Self::Lgpl21 => "LGPL-2.1-only",
      Self::Lgpl21Later => "LGPL-2.1-or-later",
      Self::Lgpl3 => "LGPL-3.0-only",
      Self::Lgpl3Later => "LGPL-3.0-or-later",
      Self::Agpl3 => "AGPL-3.0-only",
      Self::Agpl3Later => "AGPL-3.0-or-later",
      Self::Mpl2 => "MPL-2.0",
    }
  }

  /// The text of the identifier line, before comment decoration.
  pub fn identifier(self) -> String {
    format!("SPDX-License-Identifier: {}", self.as_str())
  }

  /// Human readable license name used inside GNU headers.
  const fn name(self) -> &'static str {
    match self {
      Self::Gpl2 | Self::Gpl2Later | Self::Gpl3 | Self::Gpl3Later => "GNU General Public License",
      Self::Lgpl21 | Self::Lgpl21Later | Self::Lgpl3 | Self::Lgpl3Later => "GNU Lesser Public License",
      Self::Agpl3 | Self::Agpl3Later => "GNU Affero Public License",
      Self::Mpl2 => "Mozilla Public License",
    }
  }

  const fn version(self) -> &'static str {
    match self {
      Self::Gpl2 => "version 2",
      Self::Lgpl21 => "version 2.1",
      Self::Gpl3 | Self::Lgpl3 | Self::Agpl3 => "version 3",
      Self::Gpl2Later => "either version 2 of the License, or (at your option) any later version",
      Self::Lgpl21Later => "either version 2.1 of the License, or (at your option) any later version",
      Self::Gpl3Later | Self::Lgpl3Later | Self::Agpl3Later => {
        "either version 3 of the License, or (at your option) any later version"
      }
      Self::Mpl2 => "v. 2.0",
    }
  }

  /// Renders the unwrapped header template.
  ///
  /// Paragraphs are separated by empty lines; the result still needs
  /// trimming and wrapping before it can serve as a reference header.
  pub fn header(self, year: i32, copyright: &str, project: &str) -> String {
    let preamble = format!("Copyright (c) {year} {copyright}.\nThis file is part of {project}.\n\n");

    let body = match self {
      Self::Mpl2 => format!(
        "This Source Code Form is subject to the terms of the {name}, {version}. If a copy of the MPL was not \
         distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.\n",
        name = self.name(),
        version = self.version(),
      ),
      _ => format!(
        "{project} is free software: you can redistribute it and/or modify it under the terms of the {name} as \
         published by the Free Software Foundation, {version}.\n\n{project} is distributed in the hope that it \
         will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS \
         FOR A PARTICULAR PURPOSE. See the {name} for more details.\n\nYou should have received a copy of the \
         {name} along with {project}. If not, see <https://www.gnu.org/licenses/>.\n",
        name = self.name(),
        version = self.version(),
      ),
    };

    format!("\n{preamble}{body}")
  }

  /// File name of the canonical license text.
  pub const fn text_file(self) -> &'static str {
    match self {
      Self::Gpl2 | Self::Gpl2Later => "gpl-2.0.txt",
      Self::Gpl3 | Self::Gpl3Later => "gpl-3.0.txt",
      Self::Lgpl21 | Self::Lgpl21Later => "lgpl-2.1.txt",
      Self::Lgpl3 | Self::Lgpl3Later => "lgpl-3.0.txt",
      Self::Agpl3 | Self::Agpl3Later => "agpl-3.0.txt",
      Self::Mpl2 => "mpl-2.0.txt",
    }
  }

  /// The license files a project under this license ships, as
  /// `(license, file name)` pairs.
  ///
  /// The lesser licenses extend the GPL, so their projects carry both texts.
  pub fn license_files(self) -> Vec<(Self, &'static str)> {
    match self {
      Self::Mpl2 => vec![(self, "LICENSE")],
      Self::Lgpl21 | Self::Lgpl21Later => vec![(self, "COPYING.LESSER"), (Self::Gpl2, "COPYING")],
      Self::Lgpl3 | Self::Lgpl3Later => vec![(self, "COPYING.LESSER"), (Self::Gpl3, "COPYING")],
      _ => vec![(self, "COPYING")],
    }
  }
}

impl fmt::Display for LicenseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for LicenseId {
  type Err = SpdxError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|id| id.as_str() == s)
      .ok_or_else(|| SpdxError::Unsupported(s.to_string()))
  }
}

/// Lookup of full license texts.
pub trait LicenseStore {
  /// Returns the raw license text for `id`.
  fn license_text(&self, id: LicenseId) -> Result<Vec<u8>>;
}

/// The license texts compiled into the binary.
///
/// The AGPL text is not bundled; use a [`DirectoryStore`] for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStore;

impl EmbeddedStore {
  fn bundled(id: LicenseId) -> Option<&'static [u8]> {
    match id {
      LicenseId::Gpl2 | LicenseId::Gpl2Later => Some(&include_bytes!("../licenses/gpl-2.0.txt")[..]),
      LicenseId::Gpl3 | LicenseId::Gpl3Later => Some(&include_bytes!("../licenses/gpl-3.0.txt")[..]),
      LicenseId::Lgpl21 | LicenseId::Lgpl21Later => Some(&include_bytes!("../licenses/lgpl-2.1.txt")[..]),
      LicenseId::Lgpl3 | LicenseId::Lgpl3Later => Some(&include_bytes!("../licenses/lgpl-3.0.txt")[..]),
      LicenseId::Mpl2 => Some(&include_bytes!("../licenses/mpl-2.0.txt")[..]),
      LicenseId::Agpl3 | LicenseId::Agpl3Later => None,
    }
  }
}

impl LicenseStore for EmbeddedStore {
  fn license_text(&self, id: LicenseId) -> Result<Vec<u8>> {
    Self::bundled(id).map(<[u8]>::to_vec).ok_or_else(|| {
      anyhow!(
        "no bundled license text for {id}; provide a directory holding {}",
        id.text_file()
      )
    })
  }
}

/// Reads license texts from a directory holding files named after
/// [`LicenseId::text_file`].
#[derive(Debug, Clone)]
pub struct DirectoryStore {
  root: PathBuf,
}

impl DirectoryStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }
}

impl LicenseStore for DirectoryStore {
  fn license_text(&self, id: LicenseId) -> Result<Vec<u8>> {
    let path = self.root.join(id.text_file());
    verbose_log!("Reading license text for {} from {}", id, path.display());
    fs::read(&path).with_context(|| format!("could not get license file {}", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_parse_round_trip() {
    for id in LicenseId::ALL {
      assert_eq!(id.as_str().parse::<LicenseId>(), Ok(id));
    }
  }

  #[test]
  fn test_parse_unsupported() {
    assert_eq!(
      "MIT".parse::<LicenseId>(),
      Err(SpdxError::Unsupported("MIT".to_string()))
    );
  }

  #[test]
  fn test_default_is_mpl() {
    assert_eq!(LicenseId::default(), LicenseId::Mpl2);
  }

  #[test]
  fn test_identifier() {
    assert_eq!(
      LicenseId::Lgpl3Later.identifier(),
      "SPDX-License-Identifier: LGPL-3.0-or-later"
    );
  }

  #[test]
  fn test_gnu_header() {
    let header = LicenseId::Lgpl3Later.header(2026, "Quint Daenen", "demo");
    assert!(header.starts_with("\nCopyright (c) 2026 Quint Daenen.\nThis file is part of demo.\n\n"));
    assert!(header.contains(
      "demo is free software: you can redistribute it and/or modify it under the terms of the GNU Lesser Public \
       License as published by the Free Software Foundation, either version 3 of the License, or (at your option) \
       any later version."
    ));
    assert!(header.contains("See the GNU Lesser Public License for more details."));
    assert!(header.contains("along with demo. If not, see <https://www.gnu.org/licenses/>."));
    assert_eq!(header.trim().split("\n\n").count(), 4);
  }

  #[test]
  fn test_mpl_header() {
    let header = LicenseId::Mpl2.header(2026, "Quint Daenen", "demo");
    assert!(header.contains("subject to the terms of the Mozilla Public License, v. 2.0."));
    assert!(header.contains("https://mozilla.org/MPL/2.0/."));
    assert_eq!(header.trim().split("\n\n").count(), 2);
  }

  #[test]
  fn test_license_files() {
    assert_eq!(LicenseId::Mpl2.license_files(), vec![(LicenseId::Mpl2, "LICENSE")]);
    assert_eq!(
      LicenseId::Lgpl21Later.license_files(),
      vec![(LicenseId::Lgpl21Later, "COPYING.LESSER"), (LicenseId::Gpl2, "COPYING")]
    );
    assert_eq!(
      LicenseId::Lgpl3.license_files(),
      vec![(LicenseId::Lgpl3, "COPYING.LESSER"), (LicenseId::Gpl3, "COPYING")]
    );
    assert_eq!(LicenseId::Agpl3Later.license_files(), vec![(LicenseId::Agpl3Later, "COPYING")]);
  }

  #[test]
  fn test_directory_store() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("gpl-3.0.txt"), "GNU GENERAL PUBLIC LICENSE")?;

    let store = DirectoryStore::new(temp_dir.path());
    assert_eq!(store.license_text(LicenseId::Gpl3Later)?, b"GNU GENERAL PUBLIC LICENSE");
    assert!(store.license_text(LicenseId::Agpl3).is_err());

    Ok(())
  }

  #[test]
  fn test_embedded_store() -> Result<()> {
    let store = EmbeddedStore;

    let mpl = String::from_utf8(store.license_text(LicenseId::Mpl2)?)?;
    assert!(mpl.starts_with("Mozilla Public License Version 2.0"));

    let gpl2 = String::from_utf8(store.license_text(LicenseId::Gpl2Later)?)?;
    assert!(gpl2.contains("Version 2, June 1991"));

    let lgpl3 = String::from_utf8(store.license_text(LicenseId::Lgpl3)?)?;
    assert!(lgpl3.contains("GNU LESSER GENERAL PUBLIC LICENSE"));

    let err = store.license_text(LicenseId::Agpl3Later).expect_err("AGPL is not bundled");
    assert!(err.to_string().contains("agpl-3.0.txt"));
    Ok(())
  }

  #[test]
  fn test_every_license_file_but_agpl_is_bundled() {
    for id in LicenseId::ALL {
      let agpl = matches!(id, LicenseId::Agpl3 | LicenseId::Agpl3Later);
      for (file_id, _) in id.license_files() {
        assert_eq!(EmbeddedStore.license_text(file_id).is_ok(), !agpl, "{file_id}");
      }
    }
  }
}
