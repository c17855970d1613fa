// pepreader: Read KEGG .pep protein flat files.
//
// Copyright 2025 Alexander da Franca Fernandes [alexander@francafernandes.com.br].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use std::path::PathBuf;

/// Errors returned by the indexing and extraction API.
///
/// Parsing header fields never fails, see [header](crate::header).
#[non_exhaustive]
#[derive(Debug)]
pub enum PepError {
    /// The input file could not be opened.
    FileAccess { path: PathBuf, source: std::io::Error },
    /// The offset is past the end of the input or does not point at the
    /// first byte of a header line.
    InvalidOffset { offset: u64, reason: String },
    /// Reading or seeking failed in the middle of a scan.
    Io(std::io::Error),
}

impl std::fmt::Display for PepError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PepError::FileAccess { path, source } => {
                write!(f, "Cannot read {}: {}", path.display(), source)
            },
            PepError::InvalidOffset { offset, reason } => {
                write!(f, "Invalid offset {}: {}", offset, reason)
            },
            PepError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PepError::FileAccess { source, .. } => Some(source),
            PepError::Io(e) => Some(e),
            PepError::InvalidOffset { .. } => None,
        }
    }
}

impl From<std::io::Error> for PepError {
    fn from(e: std::io::Error) -> Self {
        PepError::Io(e)
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn display_invalid_offset() {
        use super::PepError;

        let err = PepError::InvalidOffset{ offset: 12, reason: "not a header line".to_string() };

        assert_eq!(err.to_string(), "Invalid offset 12: not a header line");
    }

    #[test]
    fn file_access_keeps_source() {
        use super::PepError;
        use std::error::Error;
        use std::path::PathBuf;

        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PepError::FileAccess{ path: PathBuf::from("none.pep"), source };

        assert_eq!(err.to_string(), "Cannot read none.pep: missing");
        assert!(err.source().is_some());
    }
}
