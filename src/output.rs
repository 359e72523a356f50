//! # Output Module
//!
//! This module centralizes the user-facing output of `check` and `run`.
//!
//! Lists and summaries go to stdout. With `-q` only the paths of failing
//! files are printed, one per line, so the output can be piped.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileReport, FileStatus, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Valid header
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing or wrong header
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Checking N files..." or "Processing N files..." message.
pub fn print_start_message(file_count: usize, write_mode: bool) {
  if is_quiet() {
    return;
  }

  let verb = if write_mode { "Processing" } else { "Checking" };
  println!("{} {} {}...", verb, file_count, plural(file_count));
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the files whose header is missing or differs.
///
/// In verbose mode every file is listed along with the first mismatch found
/// in it. Otherwise the list is cut at [`DEFAULT_FILE_LIST_LIMIT`].
pub fn print_missing_files(reports: &[FileReport], root: Option<&Path>) {
  let files = filter(reports, FileStatus::Missing);
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    for file in &files {
      println!("{}", make_relative_path(&file.path, root));
    }
    return;
  }

  println!(
    "{} {} {} missing license headers:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    files.len(),
    plural(files.len())
  );
  print_file_list(&files, root, is_verbose());
}

/// Print the files a header was prepended to.
pub fn print_added_files(reports: &[FileReport], root: Option<&Path>) {
  let files = filter(reports, FileStatus::Added);
  if is_quiet() || files.is_empty() {
    return;
  }

  println!(
    "{} Added license header to {} {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    files.len(),
    plural(files.len())
  );
  print_file_list(&files, root, false);
}

/// Print the success message when all files have license headers.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have license headers.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X OK, Y missing, Z skipped" (plus "W added" in write
/// mode). In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary, write_mode: bool) {
  if is_quiet() {
    return;
  }

  let missing_str = if summary.missing > 0 {
    summary.missing.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
  } else {
    summary.missing.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
  };

  let mut summary_line = format!(
    "Summary: {} OK, {} missing, ",
    summary.valid.if_supports_color(Stream::Stdout, |s| s.cyan()),
    missing_str
  );
  if write_mode {
    summary_line.push_str(&format!(
      "{} added, ",
      summary.added.if_supports_color(Stream::Stdout, |s| s.green())
    ));
  }
  summary_line.push_str(&format!(
    "{} skipped",
    summary.skipped.if_supports_color(Stream::Stdout, |s| s.dimmed())
  ));

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{summary_line}");
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

fn filter(reports: &[FileReport], status: FileStatus) -> Vec<&FileReport> {
  reports.iter().filter(|report| report.status == status).collect()
}

fn print_file_list(files: &[&FileReport], root: Option<&Path>, with_detail: bool) {
  let show_all = is_verbose();
  let limit = if show_all { files.len() } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    let display_path = make_relative_path(&file.path, root);
    match file.detail {
      Some(ref detail) if with_detail => println!(
        "  {} {}",
        display_path,
        format!("({detail})").if_supports_color(Stream::Stdout, |s| s.dimmed())
      ),
      _ => println!("  {display_path}"),
    }
  }

  if files.len() > limit {
    println!("  ... and {} more (use -v to see all)", files.len() - limit);
  }
}

const fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// Make a path relative to `root` for display.
fn make_relative_path(path: &Path, root: Option<&Path>) -> String {
  root
    .and_then(|root| pathdiff::diff_paths(path, root))
    .filter(|relative| !relative.as_os_str().is_empty())
    .unwrap_or_else(|| path.to_path_buf())
    .to_string_lossy()
    .to_string()
}
