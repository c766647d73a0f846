//! The tabular data provider seam.
//!
//! The property engine never owns table data; it issues a small, fixed set of
//! read-only queries against a [`TableProvider`]. The query shapes mirror what
//! a relational store answers naturally (column listing, ordered selects,
//! min/max aggregates, distinct-limit-1, exact-match selects), so a SQL-,
//! CSV-, or memory-backed provider is a drop-in behind this trait.

use crate::error::TableResult;

/// One table row: a fixed-arity numeric tuple whose positions correspond 1:1
/// to the table's column list.
pub type Row = Vec<f64>;

/// Comparison filter for distinct-value queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFilter {
    /// Keep values `<=` the bound.
    AtMost(f64),
    /// Keep values `>=` the bound.
    AtLeast(f64),
}

impl ValueFilter {
    /// Whether `v` passes the filter.
    pub fn accepts(&self, v: f64) -> bool {
        match *self {
            ValueFilter::AtMost(bound) => v <= bound,
            ValueFilter::AtLeast(bound) => v >= bound,
        }
    }
}

/// Ordering for distinct-value queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Read-only access to named, numeric property tables.
///
/// Column arguments are exact stored column names; callers that accept
/// user-facing (case-insensitive) names resolve them against the column list
/// first. Implementations must be thread-safe (`Send + Sync`) so independent
/// queries can run in parallel.
pub trait TableProvider: Send + Sync {
    /// Column names of `table` in definition order.
    ///
    /// An unknown table yields an empty list rather than an error; the engine
    /// treats "no columns" as "no such table".
    fn columns(&self, table: &str) -> TableResult<Vec<String>>;

    /// All rows of `table`, ordered ascending by `column`.
    fn rows_ordered_by(&self, table: &str, column: &str) -> TableResult<Vec<Row>>;

    /// `(min, max)` of `column`, optionally restricted to rows where the
    /// fixed column equals the fixed value. `None` when no rows match.
    fn column_span(
        &self,
        table: &str,
        column: &str,
        fix: Option<(&str, f64)>,
    ) -> TableResult<Option<(f64, f64)>>;

    /// First distinct value of `column` passing `filter`, in `order`,
    /// optionally restricted to a fixed-column slice. `None` when no distinct
    /// value passes.
    fn distinct_first(
        &self,
        table: &str,
        column: &str,
        filter: ValueFilter,
        order: SortOrder,
        fix: Option<(&str, f64)>,
    ) -> TableResult<Option<f64>>;

    /// The row of `table` where both columns match exactly, or `None`.
    fn row_where_eq2(
        &self,
        table: &str,
        c1: &str,
        v1: f64,
        c2: &str,
        v2: f64,
    ) -> TableResult<Option<Row>>;
}
