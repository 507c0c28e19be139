//! Error types for the lease-to-zone converter.
//!
//! All fallible operations in this crate return [`Result<T>`], which uses
//! the [`Error`] enum for error variants.

use std::path::PathBuf;

/// Errors that can occur while converting a lease file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The lease file could not be opened.
    ///
    /// Carries the OS-level reason (missing file, permissions, ...) so the
    /// operator can fix the path and rerun.
    #[error("failed to open lease file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The lease file is too small to hold the 8-byte write-time header.
    #[error(
        "lease file {} is missing the write-time header ({size} bytes, need at least 8)",
        .path.display()
    )]
    TruncatedHeader { path: PathBuf, size: u64 },

    /// The record region of the lease file is not an exact multiple of the
    /// fixed record size.
    ///
    /// This signals corruption or a format mismatch. Both the actual
    /// remaining size and the expected record size are reported so the
    /// operator can diagnose it.
    #[error(
        "lease file {} has an incorrect size: got {remaining} bytes after the header, \
         need a multiple of {record_size}",
        .path.display()
    )]
    MisalignedSize {
        path: PathBuf,
        remaining: u64,
        record_size: u64,
    },

    /// An output zone file could not be created.
    #[error("failed to open output file {}: {source}", .path.display())]
    SinkOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing a zone line failed partway through the run.
    ///
    /// `index` is the zero-based record that could not be written; records
    /// before it have already been emitted to both sinks.
    #[error("failed to write zone entry for record {index}: {source}")]
    Write { index: usize, source: std::io::Error },

    /// Other file system I/O error (reading a validated file, flushing sinks).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for lease conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
