//! # license-header
//!
//! Stamps, verifies and renders SPDX license headers for source files.
//!
//! A header consists of an SPDX identifier line, a blank line and the wrapped
//! license notice, every line written as a line comment:
//!
//! ```text
//! // SPDX-License-Identifier: MPL-2.0
//!
//! // Copyright (c) 2026 Jane Doe.
//! // This file is part of demo.
//! //
//! // This Source Code Form is subject to the terms of the Mozilla Public License,
//! // v. 2.0. If a copy of the MPL was not distributed with this file, You can
//! // obtain one at https://mozilla.org/MPL/2.0/.
//! ```
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use license_header::comment::CommentStyle;
//! use license_header::header::HeaderChecker;
//! use license_header::processor::{Mode, Processor, ProcessorConfig};
//! use license_header::reference::{DEFAULT_WIDTH, HeaderData, render_reference};
//! use license_header::spdx::LicenseId;
//!
//! fn main() -> anyhow::Result<()> {
//!     let license = LicenseId::Mpl2;
//!     let data = HeaderData {
//!         year: 2026,
//!         copyright: "Jane Doe".to_string(),
//!         project: "demo".to_string(),
//!     };
//!     let reference = render_reference(license, &data, DEFAULT_WIDTH);
//!     let checker = HeaderChecker::new(CommentStyle::default(), &license.identifier(), &reference);
//!
//!     let processor = Processor::new(ProcessorConfig {
//!         dry_run: true,
//!         ..ProcessorConfig::new(checker, Mode::Check)
//!     })?;
//!
//!     for report in processor.process(Path::new("src"), true)? {
//!         println!("{}: {:?}", report.path.display(), report.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`wrap`] - Greedy, whitespace-preserving line wrapping
//! * [`header`] - Line-by-line header verification
//! * [`comment`] - Comment markers and the per-file marker resolvers
//! * [`spdx`] - Supported licenses, their header templates and texts
//! * [`reference`] - The canonical reference header of a project
//! * [`processor`] - Checking and stamping files and directory trees
//! * [`logging`] - Logging utilities for verbose output

pub mod comment;
pub mod config;
pub mod diff;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod reference;
pub mod report;
pub mod spdx;
pub mod wrap;
