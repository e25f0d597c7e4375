//! Data structures returned by the locator for host diagnostics.

use std::path::PathBuf;

use serde::Serialize;

use crate::locator::status::BundleStatus;

/// Snapshot of the storage layout and lookup outcome under a storage root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorReport {
  /// Storage root the report was produced for.
  pub storage_root: PathBuf,
  /// Location of the marker file.
  pub marker_file: PathBuf,
  /// Location of the bundle directory.
  pub bundle_directory: PathBuf,
  /// Outcome of reading the marker.
  pub status: BundleStatus,
}
