use std::{
    fs::{self, File, ReadDir},
    io::Read,
    path::Path,
};

pub mod error {
    use std::{io, path::PathBuf};

    pub type Result<T> = std::result::Result<T, self::Error>;

    type Msg = &'static str;

    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("{0} ({1}): {2}")]
        SingleIO(Msg, PathBuf, #[source] io::Error),
    }

    impl Error {
        pub fn source_io_kind(&self) -> io::ErrorKind {
            match self {
                Self::SingleIO(_, _, e) => e.kind(),
            }
        }
    }
}
pub use error::{Error, Result};

#[must_use]
pub fn read_dir(dir: impl AsRef<Path>) -> Result<ReadDir> {
    fs::read_dir(&dir).map_err(|e| Error::SingleIO("Cannot read dir", dir.as_ref().to_owned(), e))
}

/// Reads at most `max_bytes` bytes of the file; longer contents are truncated.
#[must_use]
pub fn read_capped(filepath: impl AsRef<Path>, max_bytes: usize) -> Result<Vec<u8>> {
    let filepath = filepath.as_ref();
    let f = File::open(filepath)
        .map_err(|e| Error::SingleIO("Cannot open file", filepath.to_owned(), e))?;
    let mut buf = Vec::with_capacity(max_bytes.min(4096));
    f.take(max_bytes as u64)
        .read_to_end(&mut buf)
        .map_err(|e| Error::SingleIO("Cannot read file", filepath.to_owned(), e))?;
    Ok(buf)
}

pub fn is_regular_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn read_capped_should_truncate_long_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.txt");
        fs::write(&path, vec![b'x'; 100]).unwrap();

        let got = read_capped(&path, 10).unwrap();
        assert_eq!(got, vec![b'x'; 10]);
    }

    #[test]
    fn read_capped_should_return_whole_short_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.txt");
        fs::write(&path, b"3\n").unwrap();

        let got = read_capped(&path, 4096).unwrap();
        assert_eq!(got, b"3\n");
    }

    #[test]
    fn read_capped_should_report_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_capped(dir.path().join("nope.txt"), 16).unwrap_err();
        assert_eq!(err.source_io_kind(), ErrorKind::NotFound);
    }

    #[test]
    fn is_regular_file_should_reject_dirs_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, b"hi").unwrap();

        assert!(is_regular_file(&path));
        assert!(!is_regular_file(dir.path()));
        assert!(!is_regular_file(dir.path().join("missing")));
    }
}
