use crate::error::{Result, RewriteError};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// File access used by the per-file orchestrator.
///
/// Production code uses [`FsStore`]; tests substitute failing stores to check that
/// one bad file never aborts a run.
#[cfg_attr(test, mockall::automock)]
pub trait FileStore {
    /// Read the whole file as UTF-8 text
    fn read(&self, path: &Utf8Path) -> Result<String>;

    /// Replace the whole file with `content`
    fn write(&self, path: &Utf8Path, content: &str) -> Result<()>;
}

/// Filesystem store with atomic writes.
///
/// Content is written to a temporary file in the same directory, flushed, then
/// renamed over the target. A failed write leaves the original untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn read(&self, path: &Utf8Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| RewriteError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Utf8Path, content: &str) -> Result<()> {
        let write_err = |source| RewriteError::Write {
            path: path.to_path_buf(),
            source,
        };

        // Write through symlinks: the rename must land on the link target
        let target = resolve_target(path).map_err(write_err)?;

        let dir = target
            .parent()
            .filter(|p| !p.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
        temp.write_all(content.as_bytes()).map_err(write_err)?;
        temp.as_file().sync_all().map_err(write_err)?;

        // Keep the original file's permissions
        if let Ok(metadata) = fs::metadata(&target) {
            fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_err)?;
        }

        temp.persist(&target).map_err(|e| write_err(e.error))?;

        tracing::debug!("Wrote {} bytes to {} ({})", content.len(), path, target);
        Ok(())
    }
}

/// Real file behind `path`, following symlinks. A path that does not exist yet
/// is written as given.
fn resolve_target(path: &Utf8Path) -> std::io::Result<Utf8PathBuf> {
    match path.canonicalize_utf8() {
        Ok(target) => Ok(target),
        Err(e)
            if e.kind() == std::io::ErrorKind::NotFound && fs::symlink_metadata(path).is_err() =>
        {
            Ok(path.to_path_buf())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_dir() -> (TempDir, Utf8PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_write_replaces_content() {
        let (_guard, dir) = temp_dir();
        let path = dir.join("badge-a.svg");
        fs::write(&path, "old content that is longer").unwrap();

        FsStore.write(&path, "new").unwrap();

        assert_eq!(FsStore.read(&path).unwrap(), "new");
        // Only the target remains, no stray temp files
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
    }

    #[test]
    fn test_read_invalid_utf8_is_error() {
        let (_guard, dir) = temp_dir();
        let path = dir.join("badge-bin.svg");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = FsStore.read(&path).unwrap_err();
        assert!(matches!(err, RewriteError::Read { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_is_error() {
        let (_guard, dir) = temp_dir();
        let path = dir.join("missing").join("badge-a.svg");

        let err = FsStore.write(&path, "x").unwrap_err();
        assert!(matches!(err, RewriteError::Write { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_follows_symlink() {
        let (_guard, dir) = temp_dir();
        let shared = dir.join("shared");
        let assets = dir.join("assets");
        fs::create_dir(&shared).unwrap();
        fs::create_dir(&assets).unwrap();

        let target = shared.join("real.svg");
        let link = assets.join("badge-a.svg");
        fs::write(&target, "old").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        FsStore.write(&link, "new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        assert_eq!(FsStore.read(&link).unwrap(), "new");
        assert_eq!(fs::read_dir(&assets).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_dangling_symlink_is_error() {
        let (_guard, dir) = temp_dir();
        let link = dir.join("badge-a.svg");
        std::os::unix::fs::symlink(dir.join("gone.svg"), &link).unwrap();

        let err = FsStore.write(&link, "new").unwrap_err();
        assert!(matches!(err, RewriteError::Write { .. }));
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }
}
