//! Sieve Core - Filter Vocabulary and Schema Types
//!
//! Declarations consumed by the query layer: the closed operator vocabulary,
//! field value kinds and their cast rules, per-entity filter schemas, the
//! raw filter request DTOs, and the validation error taxonomy.
//!
//! This crate contains ONLY data types and pure helpers - no query building,
//! no I/O. The compiler and pagination live in `sieve-query`.

pub mod error;
pub mod filter;
pub mod operator;
pub mod schema;
pub mod value;

pub use error::{ErrorDetail, FilterError, FilterResult};
pub use filter::{FilterCollection, FilterRequest};
pub use operator::FilterOperator;
pub use schema::{EntitySchema, FieldDescriptor, Filterable, SchemaBuilder, SchemaRegistry};
pub use value::{CastError, FieldKind, FilterValue};
