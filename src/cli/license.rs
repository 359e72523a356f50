//! # License Command
//!
//! Prints a license text, or writes the license files a project ships into
//! an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use license_header::config::Config;
use license_header::spdx::{DirectoryStore, EmbeddedStore, LicenseId, LicenseStore};
use license_header::verbose_log;

/// Arguments for the license command
#[derive(Args, Debug)]
pub struct LicenseArgs {
  /// SPDX license identifier [default: MPL-2.0]
  #[arg(long, value_name = "ID")]
  pub spdx: Option<LicenseId>,

  /// Output directory; the license files are written there instead of
  /// printed
  #[arg(short, long = "out", value_name = "DIR")]
  pub out: Option<PathBuf>,

  /// Dry run: print the write locations without writing
  #[arg(short, long)]
  pub dry_run: bool,

  /// Read the license texts (gpl-3.0.txt, mpl-2.0.txt, ...) from this
  /// directory instead of the bundled ones
  #[arg(long, value_name = "DIR")]
  pub licenses_dir: Option<PathBuf>,
}

/// Runs the license command.
pub fn run_license(args: &LicenseArgs, config: Option<&Config>) -> Result<()> {
  let license = super::resolve_license(args.spdx, config)?;
  let store: Box<dyn LicenseStore> = match args.licenses_dir {
    Some(ref dir) => Box::new(DirectoryStore::new(dir)),
    None => Box::new(EmbeddedStore),
  };

  let Some(ref out) = args.out else {
    let raw = store.license_text(license)?;
    println!("{}", String::from_utf8_lossy(&raw));
    return Ok(());
  };

  write_license_files(store.as_ref(), license, out, args.dry_run)
}

/// Writes every file `license` requires into `out`, or prints their paths
/// when `dry_run` is set.
fn write_license_files(store: &dyn LicenseStore, license: LicenseId, out: &Path, dry_run: bool) -> Result<()> {
  let metadata = fs::metadata(out).with_context(|| format!("{:?} not found", out.display().to_string()))?;
  if !metadata.is_dir() {
    bail!("{:?} is not a dir", out.display().to_string());
  }

  for (id, name) in license.license_files() {
    let target = out.join(name);
    let raw = store.license_text(id)?;

    if dry_run {
      println!("{}", target.display());
      continue;
    }

    verbose_log!("Writing {} to {}", id, target.display());
    fs::write(&target, raw).with_context(|| format!("failed writing license to {:?}", target.display().to_string()))?;
  }

  Ok(())
}
