//! Error types for the endirim application.
//!
//! A small hierarchical taxonomy using `thiserror`. Catalog errors are
//! non-fatal: a failed load logs the error and leaves the affected
//! collection empty, so the UI keeps working with whatever did load.
//! Terminal I/O errors are the only fatal class.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the offer catalog or the detail collection.
    ///
    /// Non-fatal at the store level: the loader logs and substitutes an
    /// empty collection. This variant only surfaces when a caller asks
    /// for a strict load.
    #[error("Failed to load catalog data: {0}")]
    Catalog(#[from] CatalogError),

    /// Terminal or TUI rendering error. Fatal: without a working
    /// terminal the application cannot continue. The terminal is
    /// restored before the error propagates.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while loading JSON data files.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read (missing, permissions, I/O).
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON for the expected shape.
    #[error("Invalid JSON in {path}: {message}")]
    Parse {
        /// Path with invalid contents.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },
}
