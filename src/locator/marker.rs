//! Reading the marker file written by the bundle fetch process.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use crate::fs::StorageFs;

/// Errors that can occur while reading an existing marker file.
#[derive(Debug)]
pub enum MarkerError {
  /// The marker exists but could not be read.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The marker contents are not valid UTF-8.
  Utf8 {
    /// Path that caused the error.
    path: PathBuf,
    /// Source decoding error.
    source: FromUtf8Error,
  },
}

/// Read the marker file and return its trimmed contents.
///
/// Returns `Ok(None)` when the marker does not exist. The returned string may be empty when
/// the marker only holds whitespace.
pub fn read_marker<F: StorageFs>(fs: &F, marker: &Path) -> Result<Option<String>, MarkerError> {
  let bytes = match fs.read(marker) {
    Ok(bytes) => bytes,
    Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
    Err(err) => {
      return Err(MarkerError::Io {
        path: marker.to_path_buf(),
        source: err,
      });
    }
  };

  let text = String::from_utf8(bytes).map_err(|err| MarkerError::Utf8 {
    path: marker.to_path_buf(),
    source: err,
  })?;
  Ok(Some(text.trim().to_string()))
}

impl std::fmt::Display for MarkerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Utf8 { path, source } => {
        write!(f, "failed to decode {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for MarkerError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Utf8 { source, .. } => Some(source),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fs::StdFs;
  use crate::fs::memory::MemoryFs;
  use tempfile::tempdir;

  #[test]
  fn missing_marker_is_not_an_error() {
    let dir = tempdir().unwrap();
    let marker = dir.path().join("ReactPushBundlePath.txt");
    assert!(read_marker(&StdFs, &marker).unwrap().is_none());
  }

  #[test]
  fn trims_surrounding_whitespace() {
    let dir = tempdir().unwrap();
    let marker = dir.path().join("ReactPushBundlePath.txt");
    std::fs::write(&marker, "\n  /data/app/bundle.js\t \n").unwrap();

    assert_eq!(
      read_marker(&StdFs, &marker).unwrap().as_deref(),
      Some("/data/app/bundle.js")
    );
  }

  #[test]
  fn whitespace_only_marker_reads_as_empty() {
    let fs = MemoryFs::default().with_file("/root/marker.txt", "   \n");
    assert_eq!(
      read_marker(&fs, Path::new("/root/marker.txt")).unwrap().as_deref(),
      Some("")
    );
  }

  #[test]
  fn rejects_invalid_utf8() {
    let fs = MemoryFs::default().with_file("/root/marker.txt", vec![0xff, 0xfe, b'/']);
    let err = read_marker(&fs, Path::new("/root/marker.txt")).unwrap_err();

    assert!(matches!(err, MarkerError::Utf8 { .. }));
    assert!(err.to_string().starts_with("failed to decode /root/marker.txt"));
  }

  #[test]
  fn surfaces_permission_errors() {
    let fs = MemoryFs::default().with_denied("/root/marker.txt");
    let err = read_marker(&fs, Path::new("/root/marker.txt")).unwrap_err();

    match &err {
      MarkerError::Io { path, source } => {
        assert_eq!(path, Path::new("/root/marker.txt"));
        assert_eq!(source.kind(), ErrorKind::PermissionDenied);
      }
      other => panic!("unexpected error: {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
  }

  #[test]
  fn directory_in_place_of_marker_is_unreadable() {
    let dir = tempdir().unwrap();
    let marker = dir.path().join("ReactPushBundlePath.txt");
    std::fs::create_dir(&marker).unwrap();

    assert!(matches!(
      read_marker(&StdFs, &marker),
      Err(MarkerError::Io { .. })
    ));
  }
}
