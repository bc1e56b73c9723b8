//! Entity filter schemas
//!
//! Each filterable entity declares, per field path, the operators it accepts
//! and the value kind raw strings are cast to. Paths may be dotted
//! (`author.firstName`), where every segment before the last names a to-one
//! relation the compiler traverses with a join.
//!
//! Schemas are declared statically (builder at startup, typically behind a
//! `once_cell::sync::Lazy`), built once, and read concurrently thereafter.
//! Entities without a registered schema do not support filtering at all.

use crate::error::{FilterError, FilterResult};
use crate::operator::FilterOperator;
use crate::value::FieldKind;
use std::collections::HashMap;

/// Declaration of one filterable field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Simple (`title`) or dotted (`author.firstName`) path
    pub path: String,
    /// Operators this field accepts; a subset of the global vocabulary
    pub operators: Vec<FilterOperator>,
    /// Value kind raw strings are cast to before binding
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Whether this field accepts the given operator.
    pub fn supports_operator(&self, operator: FilterOperator) -> bool {
        self.operators.contains(&operator)
    }

    /// Comma-separated wire strings of the allowed operators, for messages.
    pub fn allowed_operators(&self) -> String {
        self.operators
            .iter()
            .map(FilterOperator::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Immutable filter schema for one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySchema {
    entity: String,
    fields: HashMap<String, FieldDescriptor>,
}

impl EntitySchema {
    /// Start declaring a schema for the named entity.
    pub fn builder(entity: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            entity: entity.into(),
            fields: HashMap::new(),
        }
    }

    /// Name of the entity this schema belongs to.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Look up a field descriptor by exact path.
    pub fn field(&self, path: &str) -> Option<&FieldDescriptor> {
        self.fields.get(path)
    }

    /// Number of declared field paths.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the declared descriptors (order unspecified).
    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }
}

/// Builder for [`EntitySchema`].
///
/// Duplicate path declarations panic: schemas are static startup
/// declarations, so a duplicate is a programmer error, not request input.
#[derive(Debug)]
pub struct SchemaBuilder {
    entity: String,
    fields: HashMap<String, FieldDescriptor>,
}

impl SchemaBuilder {
    /// Declare one filterable field path.
    ///
    /// # Panics
    /// Panics if `path` was already declared on this schema.
    pub fn field(
        mut self,
        path: impl Into<String>,
        operators: &[FilterOperator],
        kind: FieldKind,
    ) -> Self {
        let path = path.into();
        let descriptor = FieldDescriptor {
            path: path.clone(),
            operators: operators.to_vec(),
            kind,
        };
        if self.fields.insert(path.clone(), descriptor).is_some() {
            panic!(
                "duplicate filterable path {:?} on entity {:?}",
                path, self.entity
            );
        }
        self
    }

    pub fn build(self) -> EntitySchema {
        EntitySchema {
            entity: self.entity,
            fields: self.fields,
        }
    }
}

/// Entity types that declare a filter schema.
///
/// Implementations back `filter_schema` with a `Lazy` static so the schema
/// is built once and shared read-only across requests:
///
/// ```ignore
/// impl Filterable for Post {
///     fn entity_name() -> &'static str {
///         "Post"
///     }
///
///     fn filter_schema() -> &'static EntitySchema {
///         static SCHEMA: Lazy<EntitySchema> = Lazy::new(|| {
///             EntitySchema::builder("Post")
///                 .field("title", &[FilterOperator::Eq, FilterOperator::Like], FieldKind::String)
///                 .build()
///         });
///         &SCHEMA
///     }
/// }
/// ```
pub trait Filterable {
    /// Stable entity identifier used for registry lookups and error messages.
    fn entity_name() -> &'static str;

    /// The entity's filter schema, built once.
    fn filter_schema() -> &'static EntitySchema;
}

/// Process-wide registry mapping entity names to their schemas.
///
/// Built once at startup by registering every filterable entity; lookups for
/// entities never registered fail with `EntityNotFilterable`.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, &'static EntitySchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filterable entity.
    ///
    /// # Panics
    /// Panics if the entity name was already registered.
    pub fn register<T: Filterable>(mut self) -> Self {
        let name = T::entity_name();
        if self.schemas.insert(name, T::filter_schema()).is_some() {
            panic!("entity {:?} registered twice", name);
        }
        self
    }

    /// Look up the schema for an entity, failing for undeclared entities.
    pub fn get(&self, entity: &str) -> FilterResult<&'static EntitySchema> {
        self.schemas
            .get(entity)
            .copied()
            .ok_or_else(|| FilterError::EntityNotFilterable {
                entity: entity.to_string(),
            })
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.schemas.contains_key(entity)
    }
}
