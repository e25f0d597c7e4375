//! Tagged outcome of a bundle lookup.

use serde::Serialize;

/// What the locator found under a storage root.
///
/// Every variant other than [`BundleStatus::Present`] collapses to the caller's default in
/// the total `resolve` API; this type is for callers that want to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BundleStatus {
  /// No marker file exists.
  Absent,
  /// The marker exists but could not be read or decoded.
  Unreadable {
    /// Human readable description of the failure.
    reason: String,
  },
  /// The marker holds nothing but whitespace.
  Empty,
  /// The marker names a path that no longer exists.
  Stale {
    /// Path recorded in the marker.
    path: String,
  },
  /// The marker names an existing bundle.
  Present {
    /// Path recorded in the marker.
    path: String,
  },
}

impl BundleStatus {
  /// Returns `true` when a downloaded bundle is available.
  pub fn is_present(&self) -> bool {
    matches!(self, Self::Present { .. })
  }

  /// Borrow the usable bundle path, if any.
  pub fn path(&self) -> Option<&str> {
    match self {
      Self::Present { path } => Some(path),
      _ => None,
    }
  }

  /// Take the usable bundle path, if any.
  pub fn into_path(self) -> Option<String> {
    match self {
      Self::Present { path } => Some(path),
      _ => None,
    }
  }
}
