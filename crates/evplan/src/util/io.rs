//! I/O utility functions

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content goes to a sibling `.tmp` file first, which is then renamed
/// over the target, so readers never see a half-written export.
///
/// # Example
/// ```ignore
/// atomic_write(Path::new("results/park_tornado.csv"), &csv)?;
/// ```
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = temp_path(path);
    fs::write(&temp_path, content)?;
    // Atomic on POSIX systems
    fs::rename(&temp_path, path)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Expand a leading `~` to the home directory
#[cfg(feature = "native")]
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(not(feature = "native"))]
pub fn expand_home(path: &Path) -> PathBuf {
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("park_tornado.csv");

        atomic_write(&path, "activity,decision_key,impact\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "activity,decision_key,impact\n");
        assert!(!dir.path().join("park_tornado.csv.tmp").exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comparison.csv");

        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_expand_home_leaves_relative_paths() {
        let path = Path::new("results/out");
        assert_eq!(expand_home(path), PathBuf::from("results/out"));
    }
}
