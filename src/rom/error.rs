use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum GenerateError {
    /// The ROM image could not be opened or read.
    ReadRom { path: PathBuf, source: io::Error },
    /// The generated source could not be created or written.
    WriteOutput { path: PathBuf, source: io::Error },
}

impl GenerateError {
    /// Path of the file the failing operation touched.
    pub fn path(&self) -> &Path {
        match self {
            GenerateError::ReadRom { path, .. } => path,
            GenerateError::WriteOutput { path, .. } => path,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::ReadRom { path, source } => {
                write!(f, "Failed to read ROM '{}': {}", path.display(), source)
            }
            GenerateError::WriteOutput { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerateError::ReadRom { source, .. } => Some(source),
            GenerateError::WriteOutput { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_display_read_rom() {
        let err = GenerateError::ReadRom {
            path: PathBuf::from("missing.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "oh no"),
        };
        let msg = format!("{}", err);
        assert_eq!(msg, "Failed to read ROM 'missing.bin': oh no");
    }

    #[test]
    fn test_display_write_output() {
        let err = GenerateError::WriteOutput {
            path: PathBuf::from("out/Boot.js"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("out/Boot.js"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_source_is_io_error() {
        let err = GenerateError::ReadRom {
            path: PathBuf::from("rom.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let source = err.source().expect("io error source");
        assert_eq!(source.to_string(), "gone");
        assert_eq!(err.path(), Path::new("rom.bin"));
    }
}
