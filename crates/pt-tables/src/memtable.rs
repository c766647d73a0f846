//! In-memory table provider.
//!
//! `MemTableSet` holds validated table definitions loaded from a JSON
//! document and answers the [`TableProvider`] queries with linear scans.
//! Reference property tables run tens to low hundreds of rows, so scans are
//! plenty; the point of this provider is to be the drop-in collaborator for
//! tests and the CLI.

use crate::error::{TableError, TableResult};
use crate::provider::{Row, SortOrder, TableProvider, ValueFilter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One named property table: an ordered column list plus numeric rows whose
/// positions correspond 1:1 to the columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TableDef {
    /// Check structural invariants: at least one column, unique column names
    /// (ASCII case-insensitive), every row matching the column arity, every
    /// value finite.
    pub fn validate(&self) -> TableResult<()> {
        if self.columns.is_empty() {
            return Err(self.malformed("table defines no columns".into()));
        }
        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i]
                .iter()
                .any(|prev| prev.eq_ignore_ascii_case(col))
            {
                return Err(self.malformed(format!("duplicate column '{col}'")));
            }
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(self.malformed(format!(
                    "row {i} has {} values, expected {}",
                    row.len(),
                    self.columns.len()
                )));
            }
            if let Some(v) = row.iter().find(|v| !v.is_finite()) {
                return Err(self.malformed(format!("row {i} contains non-finite value {v}")));
            }
        }
        Ok(())
    }

    fn malformed(&self, detail: String) -> TableError {
        TableError::Malformed {
            table: self.name.clone(),
            detail,
        }
    }

    fn column_index(&self, column: &str) -> TableResult<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| TableError::UnknownColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }
}

/// Top-level document shape for a JSON table set file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableSetDoc {
    tables: Vec<TableDef>,
}

/// A set of in-memory property tables, looked up by name
/// (ASCII case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct MemTableSet {
    tables: Vec<TableDef>,
}

impl MemTableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a table. Rejects a name already present.
    pub fn insert(&mut self, table: TableDef) -> TableResult<()> {
        table.validate()?;
        if self.find(&table.name).is_some() {
            return Err(TableError::Malformed {
                table: table.name.clone(),
                detail: "duplicate table name".into(),
            });
        }
        self.tables.push(table);
        Ok(())
    }

    /// Parse a `{"tables": [...]}` JSON document into a validated set.
    pub fn from_json_str(json: &str) -> TableResult<Self> {
        let doc: TableSetDoc = serde_json::from_str(json).map_err(|e| TableError::Backend {
            message: format!("JSON parse error: {e}"),
        })?;
        let mut set = Self::new();
        for table in doc.tables {
            set.insert(table)?;
        }
        Ok(set)
    }

    /// Read and parse a JSON table set file.
    pub fn from_json_file(path: &Path) -> TableResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TableError::Backend {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_json_str(&content)
    }

    /// Names of all tables in the set, in insertion order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    fn find(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    fn get(&self, name: &str) -> TableResult<&TableDef> {
        self.find(name).ok_or_else(|| TableError::Backend {
            message: format!("query against unknown table '{name}'"),
        })
    }
}

/// Rows of `table` whose `fix` column (if any) matches the fixed value.
fn slice_rows<'t>(table: &'t TableDef, fix: Option<(usize, f64)>) -> impl Iterator<Item = &'t Row> {
    table
        .rows
        .iter()
        .filter(move |row| fix.is_none_or(|(i, v)| row[i] == v))
}

impl TableProvider for MemTableSet {
    fn columns(&self, table: &str) -> TableResult<Vec<String>> {
        // Unknown table reads as "no columns"; the engine maps that to its
        // unknown-table error.
        Ok(self
            .find(table)
            .map(|t| t.columns.clone())
            .unwrap_or_default())
    }

    fn rows_ordered_by(&self, table: &str, column: &str) -> TableResult<Vec<Row>> {
        let t = self.get(table)?;
        let idx = t.column_index(column)?;
        let mut rows = t.rows.clone();
        rows.sort_by(|a, b| a[idx].total_cmp(&b[idx]));
        Ok(rows)
    }

    fn column_span(
        &self,
        table: &str,
        column: &str,
        fix: Option<(&str, f64)>,
    ) -> TableResult<Option<(f64, f64)>> {
        let t = self.get(table)?;
        let idx = t.column_index(column)?;
        let fix = match fix {
            Some((col, v)) => Some((t.column_index(col)?, v)),
            None => None,
        };
        let mut span: Option<(f64, f64)> = None;
        for row in slice_rows(t, fix) {
            let v = row[idx];
            span = Some(match span {
                Some((min, max)) => (min.min(v), max.max(v)),
                None => (v, v),
            });
        }
        Ok(span)
    }

    fn distinct_first(
        &self,
        table: &str,
        column: &str,
        filter: ValueFilter,
        order: SortOrder,
        fix: Option<(&str, f64)>,
    ) -> TableResult<Option<f64>> {
        let t = self.get(table)?;
        let idx = t.column_index(column)?;
        let fix = match fix {
            Some((col, v)) => Some((t.column_index(col)?, v)),
            None => None,
        };
        // First value in the requested order is the min (ascending) or max
        // (descending) of the passing values; distinctness cannot change it.
        let mut first: Option<f64> = None;
        for row in slice_rows(t, fix) {
            let v = row[idx];
            if !filter.accepts(v) {
                continue;
            }
            first = Some(match (first, order) {
                (Some(cur), SortOrder::Ascending) => cur.min(v),
                (Some(cur), SortOrder::Descending) => cur.max(v),
                (None, _) => v,
            });
        }
        Ok(first)
    }

    fn row_where_eq2(
        &self,
        table: &str,
        c1: &str,
        v1: f64,
        c2: &str,
        v2: f64,
    ) -> TableResult<Option<Row>> {
        let t = self.get(table)?;
        let i1 = t.column_index(c1)?;
        let i2 = t.column_index(c2)?;
        Ok(t.rows
            .iter()
            .find(|row| row[i1] == v1 && row[i2] == v2)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_table() -> TableDef {
        TableDef {
            name: "sat_demo".into(),
            columns: vec!["P".into(), "T".into(), "s".into(), "vf".into()],
            rows: vec![
                vec![50.0, 20.0, 2.0, 0.2],
                vec![70.0, 25.0, 3.0, 0.8],
            ],
        }
    }

    #[test]
    fn validate_accepts_well_formed_table() {
        assert!(two_row_table().validate().is_ok());
    }

    #[test]
    fn validate_rejects_arity_mismatch() {
        let mut t = two_row_table();
        t.rows.push(vec![90.0, 30.0]);
        let err = t.validate().unwrap_err();
        assert!(matches!(err, TableError::Malformed { .. }));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn validate_rejects_case_colliding_columns() {
        let mut t = two_row_table();
        t.columns = vec!["P".into(), "T".into(), "s".into(), "S".into()];
        assert!(t.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let mut t = two_row_table();
        t.rows[1][2] = f64::NAN;
        assert!(t.validate().is_err());
    }

    #[test]
    fn insert_rejects_duplicate_name() {
        let mut set = MemTableSet::new();
        set.insert(two_row_table()).unwrap();
        let mut dup = two_row_table();
        dup.name = "SAT_DEMO".into();
        assert!(set.insert(dup).is_err());
    }

    #[test]
    fn table_lookup_is_case_insensitive() {
        let mut set = MemTableSet::new();
        set.insert(two_row_table()).unwrap();
        assert_eq!(
            set.columns("Sat_Demo").unwrap(),
            vec!["P", "T", "s", "vf"]
        );
    }

    #[test]
    fn unknown_table_has_no_columns() {
        let set = MemTableSet::new();
        assert!(set.columns("nope").unwrap().is_empty());
    }

    #[test]
    fn rows_come_back_ordered() {
        let mut set = MemTableSet::new();
        let mut t = two_row_table();
        t.rows.reverse();
        set.insert(t).unwrap();
        let rows = set.rows_ordered_by("sat_demo", "T").unwrap();
        assert_eq!(rows[0][1], 20.0);
        assert_eq!(rows[1][1], 25.0);
    }

    #[test]
    fn span_over_whole_column_and_slice() {
        let mut set = MemTableSet::new();
        set.insert(two_row_table()).unwrap();
        assert_eq!(
            set.column_span("sat_demo", "T", None).unwrap(),
            Some((20.0, 25.0))
        );
        assert_eq!(
            set.column_span("sat_demo", "s", Some(("P", 70.0))).unwrap(),
            Some((3.0, 3.0))
        );
        assert_eq!(
            set.column_span("sat_demo", "s", Some(("P", 60.0))).unwrap(),
            None
        );
    }

    #[test]
    fn distinct_first_brackets_a_value() {
        let mut set = MemTableSet::new();
        set.insert(two_row_table()).unwrap();
        let below = set
            .distinct_first(
                "sat_demo",
                "P",
                ValueFilter::AtMost(60.0),
                SortOrder::Descending,
                None,
            )
            .unwrap();
        let above = set
            .distinct_first(
                "sat_demo",
                "P",
                ValueFilter::AtLeast(60.0),
                SortOrder::Ascending,
                None,
            )
            .unwrap();
        assert_eq!(below, Some(50.0));
        assert_eq!(above, Some(70.0));
    }

    #[test]
    fn exact_match_row_lookup() {
        let mut set = MemTableSet::new();
        set.insert(two_row_table()).unwrap();
        let row = set
            .row_where_eq2("sat_demo", "P", 70.0, "T", 25.0)
            .unwrap()
            .expect("grid row should exist");
        assert_eq!(row, vec![70.0, 25.0, 3.0, 0.8]);
        assert!(
            set.row_where_eq2("sat_demo", "P", 70.0, "T", 20.0)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn unknown_column_is_an_error() {
        let mut set = MemTableSet::new();
        set.insert(two_row_table()).unwrap();
        let err = set.rows_ordered_by("sat_demo", "Vg").unwrap_err();
        assert!(matches!(err, TableError::UnknownColumn { .. }));
    }

    #[test]
    fn json_roundtrip_through_set() {
        let json = r#"{
            "tables": [
                {
                    "name": "sat_demo",
                    "columns": ["P", "T", "s", "vf"],
                    "rows": [[50.0, 20.0, 2.0, 0.2], [70.0, 25.0, 3.0, 0.8]]
                }
            ]
        }"#;
        let set = MemTableSet::from_json_str(json).unwrap();
        assert_eq!(set.table_names().collect::<Vec<_>>(), vec!["sat_demo"]);
        assert_eq!(
            set.column_span("sat_demo", "P", None).unwrap(),
            Some((50.0, 70.0))
        );
    }

    #[test]
    fn json_with_bad_row_is_rejected() {
        let json = r#"{
            "tables": [
                { "name": "bad", "columns": ["P", "T"], "rows": [[1.0]] }
            ]
        }"#;
        assert!(MemTableSet::from_json_str(json).is_err());
    }
}
