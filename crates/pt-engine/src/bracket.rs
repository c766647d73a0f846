//! Bracketing for the dual-axis (pressure x property) search.
//!
//! Stage 1 finds the two tabulated pressures straddling the query pressure;
//! stage 2 finds, at one fixed pressure, the two tabulated values of the
//! secondary property straddling the query value. Both bounds collapse to a
//! single value on an exact tabulated match, which the downstream
//! interpolation degenerates through correctly.

use crate::error::{EngineError, EngineResult};
use crate::range::check_span;
use pt_tables::{SortOrder, TableProvider, ValueFilter};

/// The two distinct tabulated pressures immediately below and above
/// `query` (equal to each other only on an exact tabulated pressure).
pub fn pressure_bracket<P: TableProvider + ?Sized>(
    provider: &P,
    table: &str,
    pressure_column: &str,
    query: f64,
) -> EngineResult<(f64, f64)> {
    check_span(provider, table, pressure_column, query, None)?;
    bracket_values(provider, table, pressure_column, query, None)
}

/// The two tabulated values of `property_column` straddling `query` within
/// the `pressure_column == at_pressure` slice.
///
/// Assumes (does not verify) that the property increases monotonically along
/// an isobar — true for T, V, H and S in the superheated region.
pub fn property_bracket<P: TableProvider + ?Sized>(
    provider: &P,
    table: &str,
    pressure_column: &str,
    at_pressure: f64,
    property_column: &str,
    query: f64,
) -> EngineResult<(f64, f64)> {
    let fix = Some((pressure_column, at_pressure));
    check_span(provider, table, property_column, query, fix)?;
    bracket_values(provider, table, property_column, query, fix)
}

fn bracket_values<P: TableProvider + ?Sized>(
    provider: &P,
    table: &str,
    column: &str,
    query: f64,
    fix: Option<(&str, f64)>,
) -> EngineResult<(f64, f64)> {
    let below = provider.distinct_first(
        table,
        column,
        ValueFilter::AtMost(query),
        SortOrder::Descending,
        fix,
    )?;
    let above = provider.distinct_first(
        table,
        column,
        ValueFilter::AtLeast(query),
        SortOrder::Ascending,
        fix,
    )?;
    match (below, above) {
        (Some(lo), Some(hi)) => Ok((lo, hi)),
        // The span check passed, so both sides must exist in clean data.
        _ => Err(EngineError::DataConsistency {
            table: table.to_string(),
            detail: format!("no tabulated {column} values bracket {query}"),
        }),
    }
}
