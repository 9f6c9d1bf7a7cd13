//! Working-directory access.
//!
//! The process working directory is a single process-wide resource. Code
//! that moves it goes through [`WorkingDirectory`] so tests can substitute
//! [`InMemoryWorkingDirectory`] and leave the real one alone.

use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use std::sync::Mutex;

/// Read and change a current directory
pub trait WorkingDirectory: Send + Sync {
    /// The current directory
    fn current(&self) -> io::Result<Utf8PathBuf>;

    /// Make `path` the current directory
    fn change_to(&self, path: &Utf8Path) -> io::Result<()>;
}

/// The real process working directory
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessWorkingDirectory;

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current(&self) -> io::Result<Utf8PathBuf> {
        let cwd = std::env::current_dir()?;
        Utf8PathBuf::from_path_buf(cwd).map_err(|p| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Working directory is not valid UTF-8: {}", p.display()),
            )
        })
    }

    fn change_to(&self, path: &Utf8Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }
}

/// A current directory that lives only in memory
///
/// `change_to` still requires the target to be an existing directory.
#[derive(Debug)]
pub struct InMemoryWorkingDirectory {
    current: Mutex<Utf8PathBuf>,
}

impl InMemoryWorkingDirectory {
    pub fn new(start: impl Into<Utf8PathBuf>) -> Self {
        Self {
            current: Mutex::new(start.into()),
        }
    }
}

impl WorkingDirectory for InMemoryWorkingDirectory {
    fn current(&self) -> io::Result<Utf8PathBuf> {
        self.current
            .lock()
            .map(|current| current.clone())
            .map_err(|_| io::Error::other("working directory lock poisoned"))
    }

    fn change_to(&self, path: &Utf8Path) -> io::Result<()> {
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such directory: {}", path),
            ));
        }
        let mut current = self
            .current
            .lock()
            .map_err(|_| io::Error::other("working directory lock poisoned"))?;
        *current = path.to_path_buf();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("valid UTF-8")
    }

    #[test]
    fn test_in_memory_change_to_existing_dir() {
        let temp = TempDir::new().unwrap();
        let root = utf8(&temp);
        std::fs::create_dir(root.join("child")).unwrap();

        let workdir = InMemoryWorkingDirectory::new(root.clone());
        assert_eq!(workdir.current().unwrap(), root);

        workdir.change_to(&root.join("child")).unwrap();
        assert_eq!(workdir.current().unwrap(), root.join("child"));
    }

    #[test]
    fn test_in_memory_change_to_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let root = utf8(&temp);
        let workdir = InMemoryWorkingDirectory::new(root.clone());

        let err = workdir.change_to(&root.join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(workdir.current().unwrap(), root);
    }

    #[test]
    #[serial]
    fn test_process_working_directory_round_trip() {
        let temp = TempDir::new().unwrap();
        let workdir = ProcessWorkingDirectory;
        let original = workdir.current().unwrap();

        workdir.change_to(&utf8(&temp)).unwrap();
        let moved = workdir.current().unwrap();
        assert_eq!(
            moved.canonicalize_utf8().unwrap(),
            utf8(&temp).canonicalize_utf8().unwrap()
        );

        workdir.change_to(&original).unwrap();
        assert_eq!(workdir.current().unwrap(), original);
    }
}
