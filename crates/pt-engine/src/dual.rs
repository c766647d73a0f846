//! Dual-axis (pressure x property) interpolation.
//!
//! Resolves the full property set at an arbitrary (pressure, property) point
//! of a superheated-style grid table: bracket the pressure, resolve the
//! property axis independently at each pressure bound, then interpolate the
//! two intermediate results across the pressure axis.

use crate::bracket::{pressure_bracket, property_bracket};
use crate::error::{EngineError, EngineResult};
use crate::interp::lerp;
use crate::schema::Schema;
use crate::search::PropertyMap;
use pt_tables::TableProvider;

/// Index of the pressure axis: grid tables are keyed pressure-first, so the
/// first schema column is the pressure column by convention.
const PRESSURE_COLUMN: usize = 0;

/// Resolve every column other than the pressure and known columns at the
/// point (`pressure`, `value`), where `known` names the secondary property
/// (T, V, H or S in physical tables).
///
/// The table must be a clean grid: every (tabulated pressure, tabulated
/// property) pair has exactly one row. A missing grid row surfaces as
/// [`EngineError::DataConsistency`].
pub fn search_dual_table<P: TableProvider + ?Sized>(
    provider: &P,
    table: &str,
    pressure: f64,
    known: &str,
    value: f64,
) -> EngineResult<PropertyMap> {
    let schema = Schema::introspect(provider, table)?;
    let known_col = match schema.index_of(known) {
        Some(col) if col != PRESSURE_COLUMN => col,
        // The pressure axis itself is not a valid secondary property.
        _ => {
            let mut valid = schema.stored_names();
            valid.remove(PRESSURE_COLUMN);
            return Err(EngineError::UnknownProperty {
                name: known.to_string(),
                valid,
            });
        }
    };

    let pressure_name = schema.stored_name(PRESSURE_COLUMN);
    let (p_low, p_high) = pressure_bracket(provider, table, pressure_name, pressure)?;

    let at_low = resolve_isobar(provider, &schema, table, p_low, known_col, value)?;
    let at_high = resolve_isobar(provider, &schema, table, p_high, known_col, value)?;

    let mut out = PropertyMap::new();
    for i in (0..schema.len()).filter(|&i| i != PRESSURE_COLUMN && i != known_col) {
        let y = lerp(p_low, at_low[i], p_high, at_high[i], pressure);
        out.insert(schema.stored_name(i).to_string(), y);
    }
    Ok(out)
}

/// Interpolate every column along the known-property axis at one fixed
/// tabulated pressure. Returns values indexed by schema position (the
/// pressure and known slots are unused).
fn resolve_isobar<P: TableProvider + ?Sized>(
    provider: &P,
    schema: &Schema,
    table: &str,
    at_pressure: f64,
    known_col: usize,
    value: f64,
) -> EngineResult<Vec<f64>> {
    let pressure_name = schema.stored_name(PRESSURE_COLUMN);
    let known_name = schema.stored_name(known_col);

    let (v_low, v_high) =
        property_bracket(provider, table, pressure_name, at_pressure, known_name, value)?;
    let row_low = grid_row(provider, table, pressure_name, at_pressure, known_name, v_low)?;
    let row_high = grid_row(provider, table, pressure_name, at_pressure, known_name, v_high)?;

    let mut values = vec![0.0; schema.len()];
    for i in (0..schema.len()).filter(|&i| i != PRESSURE_COLUMN && i != known_col) {
        values[i] = lerp(v_low, row_low[i], v_high, row_high[i], value);
    }
    Ok(values)
}

fn grid_row<P: TableProvider + ?Sized>(
    provider: &P,
    table: &str,
    pressure_name: &str,
    at_pressure: f64,
    known_name: &str,
    known_value: f64,
) -> EngineResult<pt_tables::Row> {
    provider
        .row_where_eq2(table, pressure_name, at_pressure, known_name, known_value)?
        .ok_or_else(|| EngineError::DataConsistency {
            table: table.to_string(),
            detail: format!(
                "no row at {pressure_name} = {at_pressure}, {known_name} = {known_value}"
            ),
        })
}
