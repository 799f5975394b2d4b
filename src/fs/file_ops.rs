//! File readers and recursive listing

use crate::error::{Result, UtilError};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Marks a password source that names a file to read
pub const FILE_SOURCE_PREFIX: &str = "file:";

/// Resolve a password source.
///
/// `file:<path>` reads the file and returns its contents; any other value is
/// the password itself. Invalid UTF-8 in the file is replaced, not rejected.
pub fn parse_password_entry(source: &str) -> Result<String> {
    match source.strip_prefix(FILE_SOURCE_PREFIX) {
        Some(path) => {
            debug!(path, "reading password from file");
            let bytes = std::fs::read(path).map_err(|e| UtilError::io(path, e))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => Ok(source.to_string()),
    }
}

/// Non-directory entries under `root` whose extension is `ext` (with the dot,
/// e.g. `.yaml`). An empty `ext` selects entries without an extension.
///
/// Symlinks are listed as themselves and not followed. Entries that cannot be
/// read are skipped; a missing root gives an empty list.
pub fn list_files(root: impl AsRef<Path>, ext: &str) -> Vec<PathBuf> {
    let root = root.as_ref();
    let wanted = ext.strip_prefix('.').unwrap_or(ext);

    let files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| !entry.file_type().is_dir())
        .filter(|entry| entry.path().extension().unwrap_or_default() == wanted)
        .map(|entry| entry.into_path())
        .collect();

    debug!(root = %root.display(), ext, count = files.len(), "listed files");
    files
}

/// Read a whole file
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| UtilError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_password_literal() {
        assert_eq!(parse_password_entry("s3cret").unwrap(), "s3cret");
        assert_eq!(parse_password_entry("").unwrap(), "");
    }

    #[test]
    fn test_parse_password_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pass.txt");
        fs::write(&path, "from-file").unwrap();

        let source = format!("file:{}", path.display());
        assert_eq!(parse_password_entry(&source).unwrap(), "from-file");
    }

    #[test]
    fn test_parse_password_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pass.bin");
        fs::write(&path, [b'p', 0xff, b'w']).unwrap();

        let source = format!("file:{}", path.display());
        assert_eq!(parse_password_entry(&source).unwrap(), "p\u{fffd}w");
    }

    #[test]
    fn test_parse_password_missing_file() {
        let tmp = TempDir::new().unwrap();
        let source = format!("file:{}", tmp.path().join("nope").display());
        assert!(matches!(
            parse_password_entry(&source),
            Err(UtilError::Io { .. })
        ));
    }

    #[test]
    fn test_list_files_by_extension() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("nested/deeper")).unwrap();
        fs::write(tmp.path().join("a.yaml"), "").unwrap();
        fs::write(tmp.path().join("b.json"), "").unwrap();
        fs::write(tmp.path().join("nested/c.yaml"), "").unwrap();
        fs::write(tmp.path().join("nested/deeper/d.yaml"), "").unwrap();
        fs::write(tmp.path().join("nested/e.yaml.bak"), "").unwrap();
        fs::create_dir(tmp.path().join("dir.yaml")).unwrap();

        let mut found = list_files(tmp.path(), ".yaml");
        found.sort();

        let mut expected = vec![
            tmp.path().join("a.yaml"),
            tmp.path().join("nested/c.yaml"),
            tmp.path().join("nested/deeper/d.yaml"),
        ];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_list_files_without_extension() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("noext"), "").unwrap();
        fs::write(tmp.path().join("sub/Makefile"), "").unwrap();
        fs::write(tmp.path().join("a.yaml"), "").unwrap();

        let mut found = list_files(tmp.path(), "");
        found.sort();

        let mut expected = vec![tmp.path().join("noext"), tmp.path().join("sub/Makefile")];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_includes_symlinks() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real.yaml");
        let link = tmp.path().join("link.yaml");
        fs::write(&real, "a: 1").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut found = list_files(tmp.path(), ".yaml");
        found.sort();
        assert_eq!(found, vec![link, real]);
    }

    #[test]
    fn test_list_files_missing_root() {
        let tmp = TempDir::new().unwrap();
        assert!(list_files(tmp.path().join("missing"), ".yaml").is_empty());
    }

    #[test]
    fn test_read_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.bin");
        fs::write(&path, [1u8, 2, 3]).unwrap();

        assert_eq!(read_bytes(&path).unwrap(), vec![1, 2, 3]);
        assert!(read_bytes(tmp.path().join("absent")).is_err());
    }
}
