//! Table schema introspection and case-insensitive column resolution.

use crate::error::{EngineError, EngineResult};
use pt_tables::TableProvider;

/// Canonical casing for property names: first letter uppercased, rest
/// lowercased ("pr", "PR" and "Pr" all denote the same column).
pub fn canonicalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SchemaColumn {
    stored: String,
    canonical: String,
}

/// The ordered column list of one table, resolved once per table name.
///
/// Stored names preserve the table's own casing and key the results returned
/// to callers; canonical names serve the case-insensitive lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<SchemaColumn>,
}

impl Schema {
    /// Resolve the schema of `table` from the provider.
    ///
    /// A table with zero columns does not exist as far as the engine is
    /// concerned.
    pub fn introspect<P: TableProvider + ?Sized>(provider: &P, table: &str) -> EngineResult<Self> {
        let names = provider.columns(table)?;
        if names.is_empty() {
            return Err(EngineError::UnknownTable {
                table: table.to_string(),
            });
        }
        let columns = names
            .into_iter()
            .map(|stored| SchemaColumn {
                canonical: canonicalize(&stored),
                stored,
            })
            .collect();
        Ok(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Stored name of the column at `index`.
    pub fn stored_name(&self, index: usize) -> &str {
        &self.columns[index].stored
    }

    /// All stored names, in definition order.
    pub fn stored_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.stored.clone()).collect()
    }

    /// Index of the column matching `name` case-insensitively.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let wanted = canonicalize(name);
        self.columns.iter().position(|c| c.canonical == wanted)
    }
}
