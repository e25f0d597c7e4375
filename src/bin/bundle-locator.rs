//! Inspect the downloaded bundle state under a storage root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use bundle_locator::{BundleLocator, BundleStatus, LocatorConfig};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bundle-locator", version, about)]
struct Cli {
  /// JSON file overriding the marker file and bundle directory names.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Print the bundle path a host would load.
  Resolve {
    /// Storage root containing the marker file.
    root: PathBuf,
    /// Bundle identifier used when no download is available.
    #[arg(long = "default", default_value = "index.android.bundle")]
    default_bundle: String,
  },
  /// Describe what the marker file points at.
  Status {
    /// Storage root containing the marker file.
    root: PathBuf,
    /// Emit the full report as JSON.
    #[arg(long)]
    json: bool,
  },
  /// Print the marker file and bundle directory locations.
  Paths {
    /// Storage root containing the marker file.
    root: PathBuf,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  let locator = BundleLocator::with_layout(load_config(cli.config.as_deref())?.into_layout());
  println!("{}", render(&locator, cli.command)?);
  Ok(())
}

fn render(locator: &BundleLocator, command: Command) -> Result<String> {
  let output = match command {
    Command::Resolve {
      root,
      default_bundle,
    } => locator.resolve(&root, &default_bundle),
    Command::Status { root, json: true } => serde_json::to_string_pretty(&locator.report(&root))
      .context("failed to serialise locator report")?,
    Command::Status { root, json: false } => describe(&locator.status(&root)),
    Command::Paths { root } => format!(
      "marker: {}\nbundles: {}",
      locator.marker_file_path(&root).display(),
      locator.bundle_directory_path(&root).display()
    ),
  };
  Ok(output)
}

fn load_config(path: Option<&Path>) -> Result<LocatorConfig> {
  match path {
    Some(path) => LocatorConfig::from_path(path)
      .ok_or_else(|| anyhow!("failed to load config from {}", path.display())),
    None => {
      let cwd = std::env::current_dir().context("failed to determine working directory")?;
      Ok(LocatorConfig::discover(&cwd))
    }
  }
}

fn describe(status: &BundleStatus) -> String {
  match status {
    BundleStatus::Absent => "absent: no bundle marker".into(),
    BundleStatus::Unreadable { reason } => format!("unreadable: {reason}"),
    BundleStatus::Empty => "empty: bundle marker has no path".into(),
    BundleStatus::Stale { path } => format!("stale: {path} does not exist"),
    BundleStatus::Present { path } => format!("present: {path}"),
  }
}
