//! Optional configuration file for hosts that rename the storage entries.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::layout::{DEFAULT_BUNDLE_DIRECTORY, DEFAULT_MARKER_FILE, StorageLayout};

/// File name searched for by [`LocatorConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "bundle_locator.config.json";

/// Discoverable configuration describing the storage layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocatorConfig {
  /// Marker file name relative to the storage root.
  pub marker_file: String,
  /// Bundle directory name relative to the storage root.
  pub bundle_directory: String,
}

impl Default for LocatorConfig {
  fn default() -> Self {
    Self {
      marker_file: DEFAULT_MARKER_FILE.into(),
      bundle_directory: DEFAULT_BUNDLE_DIRECTORY.into(),
    }
  }
}

impl LocatorConfig {
  /// Look for `bundle_locator.config.json` inside `config_dir`.
  ///
  /// Hosts that never ship the file get the stock `ReactPushBundlePath.txt` and
  /// `ReactPushBundles` names, as do hosts whose file fails to parse.
  pub fn discover(config_dir: &Path) -> Self {
    Self::from_path(&config_dir.join(DEFAULT_CONFIG_FILE)).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
      Ok(config) => Some(config),
      Err(err) => {
        tracing::warn!(config = %path.display(), error = %err, "ignoring malformed locator config");
        None
      }
    }
  }

  /// Convert the configuration into an owned layout description.
  pub fn into_layout(self) -> StorageLayout {
    StorageLayout {
      marker_file: self.marker_file,
      bundle_directory: self.bundle_directory,
    }
  }

  /// Borrowing conversion into a layout, cloning the underlying strings.
  pub fn to_layout(&self) -> StorageLayout {
    self.clone().into_layout()
  }
}
