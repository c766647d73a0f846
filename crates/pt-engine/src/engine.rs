//! Caller-facing lookup API.

use crate::dual::search_dual_table;
use crate::error::EngineResult;
use crate::search::{search_table, PropertyMap, SortedView};
use pt_tables::TableProvider;

/// Property lookup front end over a table provider.
///
/// Owns the single-slot sorted-row cache, so the engine functions themselves
/// stay stateless; independent queries in parallel threads each use their own
/// `PropertyEngine`. The provider is only ever read.
#[derive(Debug)]
pub struct PropertyEngine<'p, P: TableProvider + ?Sized> {
    provider: &'p P,
    cache: Option<SortedView>,
}

impl<'p, P: TableProvider + ?Sized> PropertyEngine<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self {
            provider,
            cache: None,
        }
    }

    /// Single-axis lookup: bracket `value` on the `known_property` column of
    /// `table` and interpolate every other column there. Property names match
    /// case-insensitively. Rows are fetched in sorted order on every call.
    pub fn search(
        &mut self,
        table: &str,
        known_property: &str,
        value: f64,
    ) -> EngineResult<PropertyMap> {
        search_table(self.provider, table, known_property, value, true, &mut self.cache)
    }

    /// Single-axis lookup reusing the sorted rows of the previous call when
    /// the (table, property) pair is unchanged. Amortizes repeat queries on
    /// one column; the caller accepts staleness if the underlying data moves.
    pub fn search_cached(
        &mut self,
        table: &str,
        known_property: &str,
        value: f64,
    ) -> EngineResult<PropertyMap> {
        search_table(self.provider, table, known_property, value, false, &mut self.cache)
    }

    /// Dual-axis lookup on a grid table keyed pressure-first: resolve every
    /// remaining column at the (`pressure`, `value`) point, where
    /// `known_property` names the secondary axis (T, V, H or S).
    pub fn search_dual(
        &self,
        table: &str,
        pressure: f64,
        known_property: &str,
        value: f64,
    ) -> EngineResult<PropertyMap> {
        search_dual_table(self.provider, table, pressure, known_property, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_tables::{MemTableSet, TableDef};

    #[test]
    fn facade_routes_both_lookup_kinds() {
        let mut set = MemTableSet::new();
        set.insert(TableDef {
            name: "sat".into(),
            columns: vec!["P".into(), "T".into(), "s".into()],
            rows: vec![vec![50.0, 20.0, 2.0], vec![70.0, 25.0, 3.0]],
        })
        .unwrap();
        set.insert(TableDef {
            name: "sh".into(),
            columns: vec!["P".into(), "T".into(), "H".into()],
            rows: vec![
                vec![100.0, 100.0, 2600.0],
                vec![100.0, 200.0, 2800.0],
                vec![200.0, 100.0, 2580.0],
                vec![200.0, 200.0, 2780.0],
                vec![300.0, 100.0, 2560.0],
                vec![300.0, 200.0, 2760.0],
            ],
        })
        .unwrap();

        let mut engine = PropertyEngine::new(&set);
        let single = engine.search("sat", "t", 22.0).unwrap();
        assert_eq!(single["P"], 58.0);

        let cached = engine.search_cached("sat", "T", 23.0).unwrap();
        assert_eq!(cached["P"], 62.0);

        let dual = engine.search_dual("sh", 200.0, "t", 150.0).unwrap();
        assert!((dual["H"] - 2680.0).abs() < 1e-12);
    }
}
