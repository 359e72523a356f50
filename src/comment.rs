//! # Comment Module
//!
//! This module turns plain header text into line comments and back.
//!
//! The module includes:
//! - [`CommentStyle`] describing a line-comment marker such as `//` or `#`
//! - [`CommentStyleResolver`] for picking a style from a file path
//! - [`BuiltinResolver`] and [`ConfigurableResolver`] implementations
//!
//! ## Example
//!
//! ```rust
//! use license_header::comment::CommentStyle;
//!
//! let style = CommentStyle::line("//");
//! assert_eq!(style.comment("Copyright\n\nAll rights"), "// Copyright\n//\n// All rights\n");
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::verbose_log;

/// Marker used when no other style applies (the width of the default wrap
/// budget is derived from it).
pub const DEFAULT_MARKER: &str = "//";

/// A line-comment style.
///
/// Header lines are decorated as `"<marker> <text>"`; empty lines become the
/// bare marker without a trailing space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
  /// The comment token, without any trailing space (e.g. `//`, `#`, `--`)
  pub marker: String,
}

impl Default for CommentStyle {
  fn default() -> Self {
    Self::line(DEFAULT_MARKER)
  }
}

impl CommentStyle {
  /// Create a line-comment style from its marker.
  ///
  /// Surrounding whitespace in `marker` is ignored, so `"// "` and `"//"`
  /// produce the same style.
  pub fn line(marker: &str) -> Self {
    Self {
      marker: marker.trim().to_string(),
    }
  }

  /// The marker followed by the single separating space.
  pub fn prefix(&self) -> String {
    format!("{} ", self.marker)
  }

  /// Decorates one line of text.
  pub fn decorate(&self, line: &str) -> String {
    format!("{} {}", self.marker, line)
  }

  /// The bare marker used for blank lines inside a comment block.
  pub fn blank(&self) -> &str {
    &self.marker
  }

  /// Removes one leading `"<marker> "` from `line`.
  ///
  /// Lines without the prefix are returned unchanged.
  pub fn strip<'a>(&self, line: &'a str) -> &'a str {
    line
      .strip_prefix(self.marker.as_str())
      .and_then(|rest| rest.strip_prefix(' '))
      .unwrap_or(line)
  }

  /// Renders `text` as a block of line comments.
  ///
  /// The text is trimmed first. Each line is trimmed and decorated, empty
  /// lines become the bare marker, and every line is newline terminated.
  pub fn comment(&self, text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 16);

    for line in text.trim().split('\n') {
      let line = line.trim();
      if line.is_empty() {
        result.push_str(self.blank());
      } else {
        result.push_str(&self.decorate(line));
      }
      result.push('\n');
    }

    result
  }
}

/// Trait for resolving comment styles for file paths.
///
/// Returning `None` means the file type has no known line-comment syntax and
/// should not be stamped.
pub trait CommentStyleResolver: Send + Sync {
  /// Resolve the comment style for the given file path.
  fn resolve(&self, path: &Path) -> Option<CommentStyle>;
}

/// Default resolver using the built-in extension table.
#[derive(Debug, Default)]
pub struct BuiltinResolver;

impl CommentStyleResolver for BuiltinResolver {
  fn resolve(&self, path: &Path) -> Option<CommentStyle> {
    builtin_marker(&extension_of(path)).map(CommentStyle::line)
  }
}

/// Resolver that checks the user's config first, then falls back to the
/// built-in table.
pub struct ConfigurableResolver {
  config: Arc<Config>,
}

impl std::fmt::Debug for ConfigurableResolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ConfigurableResolver")
      .field("overrides", &self.config.comment_markers.len())
      .finish()
  }
}

impl ConfigurableResolver {
  pub fn new(config: Arc<Config>) -> Self {
    Self { config }
  }
}

impl CommentStyleResolver for ConfigurableResolver {
  fn resolve(&self, path: &Path) -> Option<CommentStyle> {
    let extension = extension_of(path);

    if let Some(marker) = self.config.comment_markers.get(&extension) {
      verbose_log!("Using config marker override for: .{}", extension);
      return Some(CommentStyle::line(marker));
    }

    builtin_marker(&extension).map(CommentStyle::line)
  }
}

/// Create a comment style resolver based on the provided configuration.
pub fn create_resolver(config: Option<Arc<Config>>) -> Box<dyn CommentStyleResolver> {
  match config {
    Some(cfg) => Box::new(ConfigurableResolver::new(cfg)),
    None => Box::new(BuiltinResolver),
  }
}

fn extension_of(path: &Path) -> String {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .unwrap_or("")
    .to_lowercase()
}

/// Built-in markers for languages with line comments.
fn builtin_marker(extension: &str) -> Option<&'static str> {
  match extension {
    "rs" | "go" | "c" | "h" | "cc" | "cpp" | "hpp" | "cs" | "java" | "js" | "mjs" | "ts" | "tsx" | "jsx" | "swift"
    | "kt" | "kts" | "dart" | "proto" | "scala" | "groovy" | "zig" => Some("//"),
    "py" | "sh" | "bash" | "rb" | "toml" | "yaml" | "yml" | "tf" | "pl" | "r" | "nix" => Some("#"),
    "sql" | "hs" | "lua" => Some("--"),
    "el" | "lisp" | "clj" => Some(";;"),
    "erl" | "tex" => Some("%"),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  #[test]
  fn test_line_trims_marker() {
    assert_eq!(CommentStyle::line("// ").marker, "//");
    assert_eq!(CommentStyle::line("#").prefix(), "# ");
  }

  #[test]
  fn test_strip_is_lenient() {
    let style = CommentStyle::line("//");
    assert_eq!(style.strip("// hello"), "hello");
    assert_eq!(style.strip("//  hello"), " hello");
    assert_eq!(style.strip("hello"), "hello");
    assert_eq!(style.strip("//hello"), "//hello");
    assert_eq!(style.strip("//"), "//");
  }

  #[test]
  fn test_comment_block() {
    let style = CommentStyle::line("#");
    let text = "\n  Copyright (c) 2026 Someone.\n\n  Second paragraph.\n";
    assert_eq!(
      style.comment(text),
      "# Copyright (c) 2026 Someone.\n#\n# Second paragraph.\n"
    );
  }

  #[test]
  fn test_comment_single_line() {
    let style = CommentStyle::default();
    assert_eq!(
      style.comment("SPDX-License-Identifier: MPL-2.0"),
      "// SPDX-License-Identifier: MPL-2.0\n"
    );
  }

  #[test]
  fn test_builtin_resolver() {
    let resolver = BuiltinResolver;
    assert_eq!(resolver.resolve(Path::new("main.rs")), Some(CommentStyle::line("//")));
    assert_eq!(resolver.resolve(Path::new("main.GO")), Some(CommentStyle::line("//")));
    assert_eq!(resolver.resolve(Path::new("script.py")), Some(CommentStyle::line("#")));
    assert_eq!(resolver.resolve(Path::new("query.sql")), Some(CommentStyle::line("--")));
    assert_eq!(resolver.resolve(Path::new("index.html")), None);
    assert_eq!(resolver.resolve(Path::new("Makefile")), None);
  }

  #[test]
  fn test_configurable_resolver_override_and_fallback() {
    let mut comment_markers = HashMap::new();
    comment_markers.insert("go".to_string(), "##".to_string());
    comment_markers.insert("xyz".to_string(), ";".to_string());

    let config = Config {
      comment_markers,
      ..Config::default()
    };
    let resolver = create_resolver(Some(Arc::new(config)));

    assert_eq!(resolver.resolve(Path::new("main.go")), Some(CommentStyle::line("##")));
    assert_eq!(resolver.resolve(Path::new("file.xyz")), Some(CommentStyle::line(";")));
    assert_eq!(resolver.resolve(Path::new("main.rs")), Some(CommentStyle::line("//")));
  }
}
