#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod fs;
pub mod layout;
pub mod locator;
pub mod models;

use std::path::{Path, PathBuf};

pub use config::LocatorConfig;
pub use fs::{StdFs, StorageFs};
pub use layout::{DEFAULT_BUNDLE_DIRECTORY, DEFAULT_MARKER_FILE, StorageLayout};
pub use locator::BundleLocator;
pub use locator::marker::MarkerError;
pub use locator::status::BundleStatus;
pub use models::LocatorReport;

/// Resolve the downloaded bundle under `storage_root`, falling back to `default_bundle`.
///
/// See [`BundleLocator::resolve`].
pub fn resolve(storage_root: &Path, default_bundle: &str) -> String {
  BundleLocator::new().resolve(storage_root, default_bundle)
}

/// Resolve the downloaded bundle under `storage_root`, or `None` when there is none.
pub fn resolve_or_absent(storage_root: &Path) -> Option<String> {
  BundleLocator::new().resolve_or_absent(storage_root)
}

/// Returns `true` when a downloaded bundle is available under `storage_root`.
pub fn has_downloaded_bundle(storage_root: &Path) -> bool {
  BundleLocator::new().has_downloaded_bundle(storage_root)
}

/// Classify the marker file under `storage_root`.
pub fn status(storage_root: &Path) -> BundleStatus {
  BundleLocator::new().status(storage_root)
}

/// `storage_root/ReactPushBundles`. Performs no I/O.
///
/// Absolute only when `storage_root` is absolute; hosts pass their private data directory,
/// which always is.
pub fn bundle_directory_path(storage_root: &Path) -> PathBuf {
  StorageLayout::default().bundle_directory_path(storage_root)
}

/// `storage_root/ReactPushBundlePath.txt`. Performs no I/O.
///
/// Absolute only when `storage_root` is absolute. The fetch process writes the marker
/// here, so both sides must agree on the same root.
pub fn marker_file_path(storage_root: &Path) -> PathBuf {
  StorageLayout::default().marker_file_path(storage_root)
}
