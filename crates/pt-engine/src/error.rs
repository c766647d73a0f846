//! Property engine errors.

use pt_tables::TableError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by property lookups.
///
/// Every failure is terminal for the call: the engine performs no retries and
/// no silent recovery. The one deliberate soft behavior — snapping to the
/// first row when the bracket position lands there — is normal control flow,
/// not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The provider reports no columns for this table name.
    #[error("Unknown table '{table}'")]
    UnknownTable { table: String },

    /// The property name matched no schema column. Carries the valid names
    /// for user display.
    #[error("Unknown property '{name}' (valid properties: {})", .valid.join(", "))]
    UnknownProperty { name: String, valid: Vec<String> },

    /// The query value lies outside the tabulated span of the column.
    /// Boundary-equal values are rejected too (strict open-interval check).
    #[error(
        "{column} = {value} is outside the tabulated span ({min}, {max}){}",
        pressure_note(.at_pressure)
    )]
    OutOfRange {
        column: String,
        value: f64,
        min: f64,
        max: f64,
        at_pressure: Option<f64>,
    },

    /// The table has a schema but no rows to bracket against.
    #[error("Table '{table}' has no rows")]
    NoRows { table: String },

    /// An exact-match grid row expected during dual-axis interpolation is
    /// missing; the table is not a clean (pressure x property) grid.
    #[error("Inconsistent data in table '{table}': {detail}")]
    DataConsistency { table: String, detail: String },

    /// Data-layer failure.
    #[error(transparent)]
    Provider(#[from] TableError),
}

fn pressure_note(at_pressure: &Option<f64>) -> String {
    match at_pressure {
        Some(p) => format!(" at pressure {p}"),
        None => String::new(),
    }
}
