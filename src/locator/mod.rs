//! Resolution of the effective bundle path from the marker file.
//!
//! The lookup is split into reading the marker ([`marker`]) and classifying what it points
//! at ([`status`]) so each step can be exercised on its own. [`BundleLocator`] ties them
//! together and offers the total, never-failing API used by host applications.
//!
//! Callers must tolerate a read-then-check race: the marker or the bundle it names can be
//! replaced or removed by the fetch process between resolution and the moment the host
//! loads the bundle. No lock or lease is taken on either file.

pub mod marker;
pub mod status;

use std::path::{Path, PathBuf};

use crate::fs::{StdFs, StorageFs};
use crate::layout::StorageLayout;
use crate::models::LocatorReport;

use self::marker::read_marker;
use self::status::BundleStatus;

/// Stateless resolver for the downloaded bundle under a storage root.
///
/// Holds only an immutable layout and a filesystem handle, so a single value can be shared
/// between threads or constructed fresh for each call.
#[derive(Debug, Clone, Default)]
pub struct BundleLocator<F = StdFs> {
  layout: StorageLayout,
  fs: F,
}

impl BundleLocator {
  /// Locator for the default layout on the real filesystem.
  pub fn new() -> Self {
    Self::default()
  }

  /// Locator for a custom layout on the real filesystem.
  pub fn with_layout(layout: StorageLayout) -> Self {
    Self { layout, fs: StdFs }
  }
}

impl<F: StorageFs> BundleLocator<F> {
  /// Locator backed by an arbitrary filesystem implementation.
  pub fn with_fs(layout: StorageLayout, fs: F) -> Self {
    Self { layout, fs }
  }

  /// Layout this locator resolves against.
  pub fn layout(&self) -> &StorageLayout {
    &self.layout
  }

  /// Location of the marker file. Performs no I/O.
  pub fn marker_file_path(&self, storage_root: &Path) -> PathBuf {
    self.layout.marker_file_path(storage_root)
  }

  /// Location of the bundle directory. Performs no I/O and does not check existence.
  pub fn bundle_directory_path(&self, storage_root: &Path) -> PathBuf {
    self.layout.bundle_directory_path(storage_root)
  }

  /// Classify the marker file under `storage_root`.
  pub fn status(&self, storage_root: &Path) -> BundleStatus {
    let marker = self.marker_file_path(storage_root);

    let candidate = match read_marker(&self.fs, &marker) {
      Ok(Some(candidate)) => candidate,
      Ok(None) => {
        tracing::debug!(marker = %marker.display(), "no bundle marker present");
        return BundleStatus::Absent;
      }
      Err(err) => {
        tracing::error!(error = %err, "error reading bundle marker");
        return BundleStatus::Unreadable {
          reason: err.to_string(),
        };
      }
    };

    if candidate.is_empty() {
      tracing::debug!(marker = %marker.display(), "bundle marker is empty");
      return BundleStatus::Empty;
    }

    if self.fs.exists(Path::new(&candidate)) {
      BundleStatus::Present { path: candidate }
    } else {
      tracing::warn!(bundle = %candidate, "bundle file not found at marked path");
      BundleStatus::Stale { path: candidate }
    }
  }

  /// Resolve the downloaded bundle path, falling back to `default_bundle`.
  ///
  /// Never fails: any problem with the marker or the bundle it names yields the default.
  pub fn resolve(&self, storage_root: &Path, default_bundle: &str) -> String {
    self.resolve_or_else(storage_root, || default_bundle.to_string())
  }

  /// Like [`resolve`](Self::resolve) but only computes the fallback when it is needed.
  pub fn resolve_or_else(&self, storage_root: &Path, default_bundle: impl FnOnce() -> String) -> String {
    self
      .resolve_or_absent(storage_root)
      .unwrap_or_else(default_bundle)
  }

  /// Resolve the downloaded bundle path, or `None` when there is no usable bundle.
  pub fn resolve_or_absent(&self, storage_root: &Path) -> Option<String> {
    self.status(storage_root).into_path()
  }

  /// Returns `true` when a downloaded bundle is available.
  pub fn has_downloaded_bundle(&self, storage_root: &Path) -> bool {
    self.resolve_or_absent(storage_root).is_some()
  }

  /// Snapshot of the paths and status under `storage_root` for diagnostics.
  pub fn report(&self, storage_root: &Path) -> LocatorReport {
    LocatorReport {
      storage_root: storage_root.to_path_buf(),
      marker_file: self.marker_file_path(storage_root),
      bundle_directory: self.bundle_directory_path(storage_root),
      status: self.status(storage_root),
    }
  }
}
