//! # Header Module
//!
//! Line-by-line verification of a file's license header.
//!
//! A valid header region looks like this (shown with the `//` marker):
//!
//! ```text
//! // SPDX-License-Identifier: MPL-2.0
//!
//! // Copyright (c) 2026 Someone.
//! //
//! // This Source Code Form is subject to ...
//! ```
//!
//! Line 1 is the decorated identifier, line 2 is blank, and every following
//! line corresponds to one line of the wrapped reference header. Empty
//! reference lines must be the bare marker. For the other lines one leading
//! `"<marker> "` is stripped before comparing, and a line without that prefix
//! is compared as is.
//!
//! Verification consumes the file lazily and stops at the first mismatch.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::trace;

use crate::comment::CommentStyle;

/// The first mismatch found while verifying a header, or the read failure
/// that interrupted verification.
#[derive(Debug, Error)]
pub enum HeaderError {
  #[error("missing first line")]
  MissingFirstLine,

  #[error("line 1: expected {expected:?}, got {actual:?}")]
  IdentifierMismatch { expected: String, actual: String },

  #[error("missing second line")]
  MissingSecondLine,

  #[error("line 2: expected empty second line, got {actual:?}")]
  SecondLineNotBlank { actual: String },

  #[error("file ended early, expected {expected} header lines but found {found}")]
  UnexpectedEof { expected: usize, found: usize },

  #[error("line {line}: expected {expected:?}, got {actual:?}")]
  ExpectedBlankCommentLine {
    line: usize,
    expected: String,
    actual: String,
  },

  #[error("line {line}: expected {expected:?}, got {actual:?}")]
  ContentMismatch {
    line: usize,
    expected: String,
    actual: String,
  },

  #[error("failed to read file: {0}")]
  Io(#[from] io::Error),
}

impl HeaderError {
  /// Whether this error is a read failure rather than a header mismatch.
  pub const fn is_io(&self) -> bool {
    matches!(self, Self::Io(_))
  }
}

/// Verifies that `lines` start with a license header.
///
/// # Parameters
///
/// * `lines` - Lines of the file without their terminators; consumed lazily
/// * `identifier_line` - The exact expected first line (already decorated)
/// * `reference` - The wrapped reference header, one entry per line
/// * `style` - The comment style used to decorate the reference lines
///
/// # Errors
///
/// Returns the first [`HeaderError`] encountered. No line past the failing
/// one is read.
pub fn verify<I, S>(lines: I, identifier_line: &str, reference: &[S], style: &CommentStyle) -> Result<(), HeaderError>
where
  I: IntoIterator<Item = io::Result<String>>,
  S: AsRef<str>,
{
  let mut lines = lines.into_iter();

  let first = lines.next().transpose()?.ok_or(HeaderError::MissingFirstLine)?;
  if first != identifier_line {
    return Err(HeaderError::IdentifierMismatch {
      expected: identifier_line.to_string(),
      actual: first,
    });
  }

  let second = lines.next().transpose()?.ok_or(HeaderError::MissingSecondLine)?;
  if !second.trim().is_empty() {
    return Err(HeaderError::SecondLineNotBlank { actual: second });
  }

  for (index, expected) in reference.iter().enumerate() {
    let expected = expected.as_ref();
    let line = index + 3;

    let Some(actual) = lines.next().transpose()? else {
      return Err(HeaderError::UnexpectedEof {
        expected: reference.len() + 2,
        found: line - 1,
      });
    };
    trace!(line, "comparing header line");

    if expected.is_empty() {
      if actual != style.blank() {
        return Err(HeaderError::ExpectedBlankCommentLine {
          line,
          expected: style.blank().to_string(),
          actual,
        });
      }
      continue;
    }

    let stripped = style.strip(&actual);
    if stripped != expected {
      return Err(HeaderError::ContentMismatch {
        line,
        expected: expected.to_string(),
        actual: stripped.to_string(),
      });
    }
  }

  Ok(())
}

/// A reusable checker for one canonical header.
///
/// # Examples
///
/// ```rust
/// use license_header::comment::CommentStyle;
/// use license_header::header::HeaderChecker;
///
/// let checker = HeaderChecker::new(CommentStyle::line("#"), "SPDX-License-Identifier: MPL-2.0", "Copyright\n\nText");
/// let file = checker.render();
/// assert!(checker.verify_reader(file.as_bytes()).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HeaderChecker {
  style: CommentStyle,
  identifier: String,
  reference: Vec<String>,
}

impl HeaderChecker {
  /// Creates a checker from the undecorated identifier text and the wrapped
  /// reference header.
  pub fn new(style: CommentStyle, identifier: &str, reference: &str) -> Self {
    Self {
      style,
      identifier: identifier.to_string(),
      reference: reference.lines().map(str::to_string).collect(),
    }
  }

  pub const fn style(&self) -> &CommentStyle {
    &self.style
  }

  /// The exact first line a valid file must have.
  pub fn identifier_line(&self) -> String {
    self.style.decorate(&self.identifier)
  }

  /// Returns a checker for the same header under a different comment style.
  pub fn with_style(&self, style: CommentStyle) -> Self {
    Self {
      style,
      identifier: self.identifier.clone(),
      reference: self.reference.clone(),
    }
  }

  /// Verifies a lazily produced sequence of lines.
  pub fn verify<I>(&self, lines: I) -> Result<(), HeaderError>
  where
    I: IntoIterator<Item = io::Result<String>>,
  {
    verify(lines, &self.identifier_line(), &self.reference, &self.style)
  }

  /// Verifies the lines of a buffered reader.
  ///
  /// Lines are split on `\n` with a trailing `\r` dropped. Bytes that aren't
  /// valid UTF-8 are replaced rather than treated as a read failure, so a
  /// binary file simply fails to match.
  pub fn verify_reader<R: BufRead>(&self, reader: R) -> Result<(), HeaderError> {
    let lines = reader.split(b'\n').map(|line| {
      line.map(|mut bytes| {
        if bytes.last() == Some(&b'\r') {
          bytes.pop();
        }
        String::from_utf8_lossy(&bytes).into_owned()
      })
    });
    self.verify(lines)
  }

  /// Verifies the file at `path`.
  ///
  /// The file is opened read-only and closed before this returns, whatever
  /// the outcome.
  pub fn verify_file(&self, path: &Path) -> Result<(), HeaderError> {
    let file = File::open(path)?;
    self.verify_reader(BufReader::new(file))
  }

  /// Renders the complete header block that makes a file pass verification:
  /// identifier, blank line, reference lines, blank line.
  pub fn render(&self) -> String {
    let mut rendered = self.style.comment(&self.identifier);
    rendered.push('\n');
    rendered.push_str(&self.style.comment(&self.reference.join("\n")));
    rendered.push('\n');
    rendered
  }
}
