//! pt-tables: the tabular data layer for proptab.
//!
//! Provides:
//! - The [`TableProvider`] trait — the read-only query seam the property
//!   engine talks through (column listing, ordered selects, span aggregates,
//!   distinct-limit-1, exact-match selects)
//! - The row/table data model ([`Row`], [`TableDef`])
//! - [`MemTableSet`], an in-memory provider with JSON loading, used by tests
//!   and the CLI
//!
//! # Architecture
//!
//! The engine in `pt-engine` never owns or mutates table data; it issues the
//! five query shapes of [`TableProvider`] and derives ephemeral brackets and
//! interpolation results from the answers. Keeping the query shapes aligned
//! with what a relational store answers naturally means a SQL-backed provider
//! can replace [`MemTableSet`] without touching the engine.

pub mod error;
pub mod memtable;
pub mod provider;

pub use error::{TableError, TableResult};
pub use memtable::{MemTableSet, TableDef};
pub use provider::{Row, SortOrder, TableProvider, ValueFilter};
