//! Minimal filesystem seam used by the locator.

use std::io;
use std::path::Path;

/// Read-only filesystem operations the locator depends on.
///
/// Implementations must not mutate anything; the locator only ever reads the marker file
/// and probes whether the path it names exists.
pub trait StorageFs {
  /// Read an entire file into memory.
  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  /// Returns `true` when any filesystem entry exists at `path`.
  fn exists(&self, path: &Path) -> bool;
}

/// [`StorageFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl StorageFs for StdFs {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path)
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn std_fs_reads_and_probes_real_files() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("marker.txt");
    std::fs::write(&file, b"hello").unwrap();

    assert!(StdFs.exists(&file));
    assert!(StdFs.exists(dir.path()));
    assert_eq!(StdFs.read(&file).unwrap(), b"hello");
    assert!(!StdFs.exists(&dir.path().join("missing")));
    assert_eq!(
      StdFs.read(&dir.path().join("missing")).unwrap_err().kind(),
      io::ErrorKind::NotFound
    );
  }
}
