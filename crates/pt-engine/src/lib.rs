//! pt-engine: bracket-search-and-interpolate over tabulated property data.
//!
//! Provides:
//! - Schema introspection with case-insensitive property-name resolution
//! - Strict tabulated-span range checking
//! - The two-point linear interpolation primitive
//! - Single-axis ordered-table search (saturated-state / generic tables)
//!   with a caller-owned sorted-row cache
//! - Dual-axis (pressure x secondary property) search for superheated-style
//!   grid tables
//! - [`PropertyEngine`], the caller-facing facade
//!
//! # Architecture
//!
//! The engine reads table data exclusively through the
//! [`pt_tables::TableProvider`] trait and derives only ephemeral values
//! (brackets, result maps) from it: all functions are synchronous, read-only
//! and stateless apart from the optional [`SortedView`] cache the caller
//! holds. Every failure is a typed [`EngineError`]; nothing panics on bad
//! queries or bad data.
//!
//! # Example
//!
//! ```
//! use pt_engine::PropertyEngine;
//! use pt_tables::{MemTableSet, TableDef};
//!
//! let mut set = MemTableSet::new();
//! set.insert(TableDef {
//!     name: "sat_demo".into(),
//!     columns: vec!["P".into(), "T".into(), "s".into()],
//!     rows: vec![vec![50.0, 20.0, 2.0], vec![70.0, 25.0, 3.0]],
//! })
//! .unwrap();
//!
//! let mut engine = PropertyEngine::new(&set);
//! let state = engine.search("sat_demo", "T", 22.0).unwrap();
//! assert_eq!(state["P"], 58.0);
//! ```

pub mod bracket;
pub mod dual;
pub mod engine;
pub mod error;
pub mod interp;
pub mod range;
pub mod schema;
pub mod search;

pub use bracket::{pressure_bracket, property_bracket};
pub use dual::search_dual_table;
pub use engine::PropertyEngine;
pub use error::{EngineError, EngineResult};
pub use interp::lerp;
pub use range::check_span;
pub use schema::{canonicalize, Schema};
pub use search::{search_table, PropertyMap, SortedView};
