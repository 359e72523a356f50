//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing, with one subcommand per operation.

mod check;
mod header;
mod license;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
use license_header::config::{Config, load_config};
use license_header::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use license_header::processor::Mode;
use license_header::spdx::LicenseId;

use self::check::{CheckArgs, DiffArgs, RunArgs, run_check};
use self::header::{HeaderArgs, run_header};
use self::license::{LicenseArgs, run_license};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Print the wrapped header for a project
  license-header header -c \"Jane Doe\" -n demo

  # Write the license files of a project into the current directory
  license-header license --spdx LGPL-3.0-or-later -o .

  # Check every Go and Rust file below src/, reporting all failures
  license-header check -c \"Jane Doe\" -n demo -p src -r -d

  # Prepend the header to every file that lacks it
  license-header run -c \"Jane Doe\" -n demo -p src -r
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,

  #[command(flatten)]
  pub global: GlobalArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Print the wrapped license header
  Header(HeaderArgs),

  /// Print the license text, or write the license files into a directory
  License(LicenseArgs),

  /// Check that files start with the license header
  Check(CheckArgs),

  /// Prepend the license header to files that don't have it
  Run(RunArgs),
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
  /// Path to config file (default: .license-header.toml in the working
  /// directory)
  #[arg(long, value_name = "FILE", global = true)]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, global = true)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose", global = true)]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum,
    global = true
  )]
  pub colors: ColorMode,
}

impl GlobalArgs {
  /// Sets up logging and colors.
  fn init(&self) {
    init_tracing(self.quiet, self.verbose);

    if self.verbose > 0 {
      set_verbose();
    } else if self.quiet {
      set_quiet();
    }
    self.colors.apply();
  }

  /// Loads the project configuration from the working directory.
  fn load_config(&self) -> Result<Option<Config>> {
    load_config(self.config.as_deref(), std::path::Path::new("."), self.no_config)
  }
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Runs the selected subcommand.
  pub fn run(self) -> Result<()> {
    self.global.init();
    let config = self.global.load_config()?;

    match self.command {
      Command::Header(args) => run_header(&args, config.as_ref()),
      Command::License(args) => run_license(&args, config.as_ref()),
      Command::Check(args) => run_check(args, DiffArgs::default(), config, Mode::Check),
      Command::Run(args) => run_check(args.check, args.diff, config, Mode::Write),
    }
  }
}

/// The license from the flag, then the config, then the default.
fn resolve_license(flag: Option<LicenseId>, config: Option<&Config>) -> Result<LicenseId> {
  match (flag, config.and_then(|c| c.spdx.as_deref())) {
    (Some(id), _) => Ok(id),
    (None, Some(spdx)) => Ok(spdx.parse()?),
    (None, None) => Ok(LicenseId::default()),
  }
}
