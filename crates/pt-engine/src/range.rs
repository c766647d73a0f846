//! Tabulated-span range checking.

use crate::error::{EngineError, EngineResult};
use pt_tables::TableProvider;

/// Confirm `value` lies strictly inside the tabulated span of `column`,
/// optionally restricted to a fixed-pressure slice.
///
/// The check is a strict open interval: a query exactly equal to the
/// tabulated minimum or maximum is rejected. Existing table consumers depend
/// on that boundary behavior, so tests pin it.
pub fn check_span<P: TableProvider + ?Sized>(
    provider: &P,
    table: &str,
    column: &str,
    value: f64,
    at_pressure: Option<(&str, f64)>,
) -> EngineResult<()> {
    let span = provider.column_span(table, column, at_pressure)?;
    let Some((min, max)) = span else {
        return Err(EngineError::NoRows {
            table: table.to_string(),
        });
    };
    if min < value && value < max {
        Ok(())
    } else {
        Err(EngineError::OutOfRange {
            column: column.to_string(),
            value,
            min,
            max,
            at_pressure: at_pressure.map(|(_, p)| p),
        })
    }
}
