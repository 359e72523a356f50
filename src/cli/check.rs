//! # Check Command
//!
//! This module implements the `check` and `run` commands. Both resolve the
//! reference header, collect the files below `--path` and verify them; `run`
//! additionally prepends the header to failing files.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use license_header::comment::{CommentStyle, create_resolver};
use license_header::config::Config;
use license_header::diff::DiffManager;
use license_header::header::HeaderChecker;
use license_header::info_log;
use license_header::output::{
  print_added_files, print_all_files_ok, print_blank_line, print_hint, print_missing_files, print_start_message,
  print_summary,
};
use license_header::processor::{Mode, Processor, ProcessorConfig};
use license_header::reference::resolve_reference;
use license_header::report::{ProcessingSummary, write_json_report};
use tracing::debug;

use super::header::HeaderDataArgs;

/// Arguments for the check and run commands
#[derive(Args, Debug)]
pub struct CheckArgs {
  #[command(flatten)]
  pub data: HeaderDataArgs,

  /// The path to check, either a file or a directory (with -r)
  #[arg(short, long, value_name = "PATH", default_value = ".")]
  pub path: PathBuf,

  /// Recursively walk the directory
  #[arg(short, long)]
  pub recursive: bool,

  /// Dry run: report every failure without exiting (check) or writing (run)
  #[arg(short, long)]
  pub dry_run: bool,

  /// Only walk files with these extensions (repeatable, case-insensitive)
  #[arg(long = "ext", value_name = "EXT")]
  pub extensions: Vec<String>,

  /// Paths to skip during the walk (repeatable, glob relative to --path)
  #[arg(long, value_name = "GLOB")]
  pub exclude: Vec<String>,

  /// Write a JSON report of the results to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
  #[command(flatten)]
  pub check: CheckArgs,

  #[command(flatten)]
  pub diff: DiffArgs,
}

/// Diff output of `run --dry-run`
#[derive(Args, Debug, Default)]
pub struct DiffArgs {
  /// Show the diff of the headers that would be added (with -d)
  #[arg(long)]
  pub show_diff: bool,

  /// Save the diff of the headers that would be added to a file (with -d)
  #[arg(long, value_name = "FILE")]
  pub save_diff: Option<PathBuf>,
}

/// Run the check or run command with the given arguments
pub fn run_check(args: CheckArgs, diff: DiffArgs, config: Option<Config>, mode: Mode) -> Result<()> {
  let license = args.data.license(config.as_ref())?;
  let width = args.data.width(config.as_ref());
  let data = args.data.data(config.as_ref());

  let reference = resolve_reference(Path::new("."), license, data.as_ref(), width)?;
  let checker = HeaderChecker::new(CommentStyle::default(), &license.identifier(), &reference);

  let extensions = if args.extensions.is_empty() {
    config
      .as_ref()
      .map_or_else(|| Config::default().walk_extensions(), Config::walk_extensions)
  } else {
    args.extensions
  };

  let mut exclude = config.as_ref().map(|c| c.exclude.clone()).unwrap_or_default();
  exclude.extend(args.exclude);

  let diff_manager = DiffManager::new(diff.show_diff, diff.save_diff);
  diff_manager.init()?;

  if config.is_some() {
    debug!("Using configuration file for comment marker overrides");
  }

  let processor = Processor::new(ProcessorConfig {
    dry_run: args.dry_run,
    extensions,
    exclude,
    resolver: Some(create_resolver(config.map(Arc::new))),
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(checker, mode)
  })?;

  let files = processor.collect(&args.path, args.recursive)?;
  let write_mode = mode == Mode::Write;

  print_start_message(files.len(), write_mode);

  let start_time = Instant::now();
  let reports = processor.process_collected(&args.path, &files)?;
  let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());

  let root = args.path.is_dir().then_some(args.path.as_path());

  print_blank_line();
  if summary.has_missing() {
    print_missing_files(&reports, root);
  } else if summary.added > 0 {
    print_added_files(&reports, root);
  } else {
    print_all_files_ok();
  }

  print_blank_line();
  print_summary(&summary, write_mode);

  if summary.has_missing() {
    print_blank_line();
    print_hint(match mode {
      Mode::Check => "Run `license-header run` to add missing headers.",
      Mode::Write => "Run without --dry-run to add missing headers.",
    });
  }

  if let Some(ref output_path) = args.report_json {
    write_json_report(output_path, &reports, &summary)?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  Ok(())
}
