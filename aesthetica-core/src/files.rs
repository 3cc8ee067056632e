use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Replace `path` with `contents` via a temp file in the same directory, so a
/// failed write never leaves a truncated file behind.
///
/// An existing target keeps its permissions. A new file gets the same mode a
/// plain `File::create` would give it under the current umask.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = temp_file_in(dir)?;
    tmp.write_all(contents)?;

    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }

    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // 0666 is masked by the umask at creation, same as File::create
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn mode(path: &Path) -> u32 {
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn test_existing_file_keeps_mode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        fs::write(&path, b"old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert_eq!(mode(&path), 0o640);
    }

    #[test]
    fn test_new_file_gets_default_mode() {
        let temp_dir = TempDir::new().unwrap();
        let reference = temp_dir.path().join("reference");
        fs::write(&reference, b"").unwrap();
        let path = temp_dir.path().join("fresh.json");

        write_atomic(&path, b"{}").unwrap();

        assert_eq!(mode(&path), mode(&reference));
    }
}
