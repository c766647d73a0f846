//! Data-layer errors.

use thiserror::Error;

/// Result type for table provider operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised by the tabular data layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// A column name was passed that the table does not define.
    #[error("Table '{table}' has no column '{column}'")]
    UnknownColumn { table: String, column: String },

    /// A table definition failed validation (arity mismatch, duplicate
    /// column, non-finite value).
    #[error("Malformed table '{table}': {detail}")]
    Malformed { table: String, detail: String },

    /// Backend failure (I/O, parse) while loading or querying table data.
    #[error("Table backend error: {message}")]
    Backend { message: String },
}
