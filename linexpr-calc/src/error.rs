//! # Calculator Error Type
//!
//! [`CalcError`] covers the failures of the line driver itself, as opposed to
//! a bad line (see [`linexpr::LineError`], which is reported and skipped).
//!
//! - **Reading** the input stream fails: processing stops after the lines
//!   already handled.
//! - **Writing** a report fails.
//! - **Opening** an input file fails.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    /// The input stream failed mid-way (including invalid UTF-8).
    #[error("Error reading {input}: {source}")]
    Read {
        /// Human name of the input ("standard input" or a path).
        input: String,
        #[source]
        source: io::Error,
    },

    /// A report line could not be written.
    #[error("write error {0}")]
    Write(#[from] io::Error),

    /// An input file could not be opened.
    #[error("can't open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_input() {
        let err = CalcError::Read {
            input: "standard input".into(),
            source: io::Error::new(io::ErrorKind::InvalidData, "bad bytes"),
        };
        assert_eq!(err.to_string(), "Error reading standard input: bad bytes");
    }

    #[test]
    fn io_error_maps_to_write() {
        let err: CalcError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, CalcError::Write(_)));
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn calc_error_is_send_sync_static() {
        _assert_send_sync_static::<CalcError>();
    }
}
