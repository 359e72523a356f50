//! # Header Command
//!
//! Prints the wrapped reference header, and holds the header flags shared
//! with `check` and `run`.

use anyhow::{Result, bail};
use chrono::Datelike;
use clap::Args;
use clap::builder::RangedU64ValueParser;
use license_header::config::Config;
use license_header::reference::{DEFAULT_WIDTH, HeaderData, render_reference};
use license_header::spdx::LicenseId;

/// Flags describing the header to generate
#[derive(Args, Debug, Default)]
pub struct HeaderDataArgs {
  /// SPDX license identifier [default: MPL-2.0]
  #[arg(long, value_name = "ID")]
  pub spdx: Option<LicenseId>,

  /// Project name
  #[arg(short = 'n', long = "project", value_name = "NAME")]
  pub project: Option<String>,

  /// Copyright year [default: current year]
  #[arg(short, long)]
  pub year: Option<i32>,

  /// Copyright holder
  #[arg(short, long, value_name = "HOLDER")]
  pub copyright: Option<String>,

  /// Wrap width of the header text [default: 77]
  #[arg(long, value_name = "COLUMNS", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
  pub width: Option<usize>,
}

impl HeaderDataArgs {
  pub fn license(&self, config: Option<&Config>) -> Result<LicenseId> {
    super::resolve_license(self.spdx, config)
  }

  pub fn width(&self, config: Option<&Config>) -> usize {
    self.width.or_else(|| config.and_then(|c| c.width)).unwrap_or(DEFAULT_WIDTH)
  }

  pub fn year(&self) -> i32 {
    self.year.unwrap_or_else(|| chrono::Local::now().year())
  }

  pub fn copyright(&self, config: Option<&Config>) -> Option<String> {
    self.copyright.clone().or_else(|| config.and_then(|c| c.copyright.clone()))
  }

  pub fn project(&self, config: Option<&Config>) -> Option<String> {
    self.project.clone().or_else(|| config.and_then(|c| c.project.clone()))
  }

  /// Header data, when both the holder and the project are known.
  pub fn data(&self, config: Option<&Config>) -> Option<HeaderData> {
    HeaderData::from_parts(self.year(), self.copyright(config), self.project(config))
  }
}

/// Arguments for the header command
#[derive(Args, Debug, Default)]
pub struct HeaderArgs {
  #[command(flatten)]
  pub data: HeaderDataArgs,
}

/// Prints the wrapped header to stdout.
pub fn run_header(args: &HeaderArgs, config: Option<&Config>) -> Result<()> {
  let license = args.data.license(config)?;

  let Some(copyright) = args.data.copyright(config).filter(|c| !c.is_empty()) else {
    bail!("no Copyright Holder (-c) specified");
  };
  let Some(project) = args.data.project(config).filter(|p| !p.is_empty()) else {
    bail!("no Name (-n) specified");
  };

  let data = HeaderData {
    year: args.data.year(),
    copyright,
    project,
  };
  println!("{}", render_reference(license, &data, args.data.width(config)));

  Ok(())
}
