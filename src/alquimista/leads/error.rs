use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool ingests, consolidates, or emits lead data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when CSV serialization fails.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a source sheet lacks the columns the pipeline keys on.
    #[error("sheet '{sheet}' is missing required columns: {columns}")]
    MissingColumns { sheet: String, columns: String },

    /// Raised when no source workbook carried any usable rows.
    #[error("no Telefones or Emails rows found in any source workbook")]
    NoSourceData,

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
