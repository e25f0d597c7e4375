//! Fixed on-disk layout shared with the process that downloads bundles.

use std::path::{Path, PathBuf};

/// File name of the marker recording the active downloaded bundle.
pub const DEFAULT_MARKER_FILE: &str = "ReactPushBundlePath.txt";

/// Directory name the fetch process stores downloaded bundles under.
pub const DEFAULT_BUNDLE_DIRECTORY: &str = "ReactPushBundles";

/// Names of the marker file and bundle directory relative to a storage root.
///
/// The layout is owned by the external fetch process; this crate only ever joins these
/// names onto a storage root and never creates or writes the resulting entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
  /// Marker file name, relative to the storage root.
  pub marker_file: String,
  /// Bundle directory name, relative to the storage root.
  pub bundle_directory: String,
}

impl Default for StorageLayout {
  fn default() -> Self {
    Self {
      marker_file: DEFAULT_MARKER_FILE.into(),
      bundle_directory: DEFAULT_BUNDLE_DIRECTORY.into(),
    }
  }
}

impl StorageLayout {
  /// Location of the marker file under `storage_root`. Performs no I/O.
  ///
  /// The result is only absolute when `storage_root` is; a relative root is joined as
  /// given rather than resolved against the working directory.
  pub fn marker_file_path(&self, storage_root: &Path) -> PathBuf {
    storage_root.join(&self.marker_file)
  }

  /// Location of the bundle directory under `storage_root`. Performs no I/O.
  ///
  /// Relative roots stay relative, as with [`marker_file_path`](Self::marker_file_path).
  pub fn bundle_directory_path(&self, storage_root: &Path) -> PathBuf {
    storage_root.join(&self.bundle_directory)
  }
}
