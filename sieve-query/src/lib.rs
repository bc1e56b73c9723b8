//! Sieve Query - Filter Compilation and Pagination
//!
//! The behavior half of the sieve workspace. Takes untrusted filter JSON and
//! a declared [`sieve_core::EntitySchema`], and produces a parameterized
//! query predicate a persistence layer can execute:
//!
//! - [`parse::parse_filters`] validates structural shape only.
//! - [`compile::compile`] resolves field paths (building a deduplicated left
//!   join chain for dotted paths), checks operators against the schema,
//!   casts values, and emits uniquely named bind parameters.
//! - [`paginate::paginate`] runs a count query plus a page fetch through a
//!   [`paginate::PredicateExecutor`] and wraps the result in a page envelope.
//! - [`memory`] provides an in-memory executor used in tests and small
//!   deployments without a database.
//!
//! Compilation is all-or-nothing per request: the first failing filter
//! aborts the call and no query runs.

pub mod compile;
pub mod memory;
pub mod paginate;
pub mod parse;

pub use compile::{compile, compile_entity, Clause, Join, Predicate};
pub use memory::{FieldAccess, MemoryExecutor};
pub use paginate::{paginate, Page, PageInfo, PageParams, PredicateExecutor};
pub use parse::parse_filters;
