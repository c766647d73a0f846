//! Single-axis ordered-table search.
//!
//! Brackets a query value on one named column of an ordered table and
//! linearly interpolates every other column at that value. This is the
//! saturated-state / generic lookup path; the dual-axis path in
//! [`crate::dual`] builds on the same primitives.

use crate::error::{EngineError, EngineResult};
use crate::interp::lerp;
use crate::range::check_span;
use crate::schema::Schema;
use pt_tables::{Row, TableProvider};
use std::collections::BTreeMap;

/// Interpolated values keyed by stored column name, excluding the known
/// (query) column(s).
pub type PropertyMap = BTreeMap<String, f64>;

/// Caller-owned cache of one table's rows sorted ascending by one column.
///
/// Reusing the view skips the ordered re-fetch on repeated queries against
/// the same (table, column) pair. The engine does not guard against the
/// underlying data changing between calls; staleness is the caller's risk.
#[derive(Debug, Clone)]
pub struct SortedView {
    table: String,
    column: String,
    rows: Vec<Row>,
}

impl SortedView {
    fn matches(&self, table: &str, column: &str) -> bool {
        self.table.eq_ignore_ascii_case(table) && self.column.eq_ignore_ascii_case(column)
    }
}

/// Locate `value` on the `known` column of `table` and interpolate every
/// other column there.
///
/// With `sort` true the table's rows are re-fetched in order and the cache
/// rewritten; with `sort` false a cache matching the (table, column) pair is
/// reused as-is. The returned map is keyed by the table's own column names.
pub fn search_table<P: TableProvider + ?Sized>(
    provider: &P,
    table: &str,
    known: &str,
    value: f64,
    sort: bool,
    cache: &mut Option<SortedView>,
) -> EngineResult<PropertyMap> {
    let schema = Schema::introspect(provider, table)?;
    let col = schema
        .index_of(known)
        .ok_or_else(|| EngineError::UnknownProperty {
            name: known.to_string(),
            valid: schema.stored_names(),
        })?;
    let known_stored = schema.stored_name(col);

    check_span(provider, table, known_stored, value, None)?;

    let view = match cache.take() {
        Some(v) if !sort && v.matches(table, known_stored) => v,
        _ => SortedView {
            table: table.to_string(),
            column: known_stored.to_string(),
            rows: provider.rows_ordered_by(table, known_stored)?,
        },
    };

    // First row whose known-column value is >= the query. The range check
    // guarantees the position lands inside the row list.
    let pos = view.rows.partition_point(|row| row[col] < value);
    let result = resolve_bracket(&schema, &view.rows, col, pos, value);
    *cache = Some(view);
    Ok(result)
}

/// Interpolate every non-known column at `value` given the bracket position
/// `pos` (first row index with `rows[pos][col] >= value`).
///
/// At `pos == 0` the query snaps to row 0 outright: every other column is
/// taken directly from the first row, with no interpolation.
pub(crate) fn resolve_bracket(
    schema: &Schema,
    rows: &[Row],
    col: usize,
    pos: usize,
    value: f64,
) -> PropertyMap {
    let mut out = PropertyMap::new();
    if pos == 0 {
        for i in (0..schema.len()).filter(|&i| i != col) {
            out.insert(schema.stored_name(i).to_string(), rows[0][i]);
        }
        return out;
    }
    let (lower, upper) = (&rows[pos - 1], &rows[pos]);
    for i in (0..schema.len()).filter(|&i| i != col) {
        let y = lerp(lower[col], lower[i], upper[col], upper[i], value);
        out.insert(schema.stored_name(i).to_string(), y);
    }
    out
}
