//! Append-only file sink.
use crate::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// A sink which appends lines to a file.
///
/// The file is opened lazily, and reopened whenever it has been removed (for
/// example by an external log rotation tool).
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}
impl FileSink {
    /// Makes a new `FileSink` instance. Nothing is opened until the first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileSink {
            path: path.as_ref().to_path_buf(),
            file: Mutex::new(None),
        }
    }

    /// The path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}
impl Sink for FileSink {
    fn write(&self, line: &[u8]) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if !self.path.exists() || file.is_none() {
            *file = Some(self.open()?);
        }
        match file.as_mut() {
            Some(f) => f.write_all(line),
            None => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("Cannot open file: {:?}", self.path),
            )),
        }
    }
    fn is_terminal(&self) -> bool {
        let file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        match file.as_ref() {
            Some(f) => f.is_terminal(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn appends_and_reopens_removed_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let sink = FileSink::new(&path);
        assert!(!path.exists());

        sink.write(b"<13>one\n").unwrap();
        sink.write(b"<13>two\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<13>one\n<13>two\n");
        assert!(!sink.is_terminal());

        fs::remove_file(&path).unwrap();
        sink.write(b"<13>three\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<13>three\n");
    }

    #[test]
    fn unwritable_paths_fail_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("missing").join("app.log"));
        assert!(sink.write(b"<13>lost\n").is_err());
    }
}
