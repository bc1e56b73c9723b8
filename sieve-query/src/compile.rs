//! Query predicate compilation
//!
//! Compiles a validated-shape [`FilterCollection`] against an entity's
//! filter schema into a [`Predicate`]: an ordered left-join list plus an
//! ordered, AND-combined clause list with uniquely named bind parameters.
//! The compiler never executes anything; rendering helpers emit DQL-style
//! fragments for a query-building collaborator.
//!
//! Dotted paths traverse to-one relations. Each relation segment maps to a
//! deterministic alias (`relation + "_filter"`), and joins are deduplicated
//! across the whole compile call, so N filters sharing a relation prefix
//! produce exactly one join per distinct (parent alias, relation) pair.
//! Joins are left/outer so a missing relation only excludes a row when a
//! clause requires a match.

use sieve_core::{
    EntitySchema, FilterCollection, FilterError, FilterOperator, FilterResult, FilterValue,
    SchemaRegistry,
};
use tracing::debug;

/// One relation traversal in the join chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    /// Alias the relation is reached from (root alias or a prior join alias)
    pub parent_alias: String,
    /// Relation field name on the parent entity
    pub relation: String,
    /// Deterministic alias for the joined entity
    pub alias: String,
}

impl Join {
    /// DQL-style fragment, e.g. `LEFT JOIN p.author author_filter`.
    pub fn to_sql(&self) -> String {
        format!("LEFT JOIN {}.{} {}", self.parent_alias, self.relation, self.alias)
    }
}

/// One parameterized comparison clause.
///
/// The bound value is never interpolated into the expression; pattern
/// operators wrap the bound value with wildcards, not the expression text.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Resolved query reference, e.g. `p.title` or `author_filter.firstName`
    pub reference: String,
    pub operator: FilterOperator,
    /// Parameter name, unique within the owning predicate
    pub param: String,
    /// Cast (and for patterns, wildcard-wrapped) bound value
    pub value: FilterValue,
}

impl Clause {
    /// Expression fragment with a named placeholder, e.g.
    /// `p.title LIKE :filter_param_0`.
    pub fn to_sql(&self) -> String {
        match self.operator {
            FilterOperator::Eq => format!("{} = :{}", self.reference, self.param),
            FilterOperator::Ne => format!("{} != :{}", self.reference, self.param),
            FilterOperator::Gt => format!("{} > :{}", self.reference, self.param),
            FilterOperator::Gte => format!("{} >= :{}", self.reference, self.param),
            FilterOperator::Lt => format!("{} < :{}", self.reference, self.param),
            FilterOperator::Lte => format!("{} <= :{}", self.reference, self.param),
            FilterOperator::In => format!("{} IN (:{})", self.reference, self.param),
            FilterOperator::NotIn => format!("{} NOT IN (:{})", self.reference, self.param),
            FilterOperator::Like | FilterOperator::StartsWith | FilterOperator::EndsWith => {
                format!("{} LIKE :{}", self.reference, self.param)
            }
        }
    }
}

/// Compiled output: joins plus conjunctive clauses.
///
/// Owned by the query being built; each compile call produces its own
/// independent accumulator, so concurrent compilations never interfere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    pub joins: Vec<Join>,
    pub clauses: Vec<Clause>,
}

impl Predicate {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.joins.is_empty()
    }

    /// `LEFT JOIN` fragments in traversal order.
    pub fn join_sql(&self) -> Vec<String> {
        self.joins.iter().map(Join::to_sql).collect()
    }

    /// AND-combined `WHERE` body, or `None` when there are no clauses.
    pub fn where_sql(&self) -> Option<String> {
        if self.clauses.is_empty() {
            return None;
        }
        Some(
            self.clauses
                .iter()
                .map(Clause::to_sql)
                .collect::<Vec<_>>()
                .join(" AND "),
        )
    }

    /// Named parameter bindings in clause order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.clauses.iter().map(|c| (c.param.as_str(), &c.value))
    }
}

/// Compile a filter collection against an entity schema.
///
/// Clauses come out in collection order. Compilation is all-or-nothing: the
/// first failing filter aborts the call with a validation error and no
/// partial predicate is returned.
pub fn compile(
    filters: &FilterCollection,
    schema: &EntitySchema,
    root_alias: &str,
) -> FilterResult<Predicate> {
    let mut predicate = Predicate::default();
    let mut param_counter = 0usize;

    for filter in filters {
        let descriptor =
            schema
                .field(&filter.field)
                .ok_or_else(|| FilterError::InvalidField {
                    field: filter.field.clone(),
                })?;

        let operator = FilterOperator::parse(&filter.operator)
            .filter(|op| descriptor.supports_operator(*op))
            .ok_or_else(|| FilterError::InvalidOperator {
                field: filter.field.clone(),
                operator: filter.operator.clone(),
                allowed: descriptor.allowed_operators(),
            })?;

        let reference = resolve_path(&mut predicate.joins, &descriptor.path, root_alias);

        let value = if operator.is_pattern() {
            // Patterns bind the raw value wrapped with wildcards; no cast.
            // Wildcard metacharacters inside the user value are not escaped,
            // matching the wire contract's documented gap.
            let wrapped = match operator {
                FilterOperator::Like => format!("%{}%", filter.value),
                FilterOperator::StartsWith => format!("{}%", filter.value),
                FilterOperator::EndsWith => format!("%{}", filter.value),
                _ => unreachable!(),
            };
            FilterValue::Str(wrapped)
        } else {
            let cast = if operator.requires_list_value() {
                descriptor.kind.cast_list(&filter.value)
            } else {
                descriptor.kind.cast(&filter.value)
            };
            cast.map_err(|e| FilterError::InvalidValue {
                field: filter.field.clone(),
                value: e.value,
                kind: e.kind,
            })?
        };

        let param = format!("filter_param_{param_counter}");
        param_counter += 1;

        predicate.clauses.push(Clause {
            reference,
            operator,
            param,
            value,
        });
    }

    debug!(
        entity = schema.entity(),
        clauses = predicate.clauses.len(),
        joins = predicate.joins.len(),
        "compiled filter predicate"
    );

    Ok(predicate)
}

/// Compile against a registry-resolved schema.
///
/// An empty collection compiles to an empty predicate without touching the
/// registry; a non-empty collection against an undeclared entity fails with
/// `EntityNotFilterable`.
pub fn compile_entity(
    filters: &FilterCollection,
    registry: &SchemaRegistry,
    entity: &str,
    root_alias: &str,
) -> FilterResult<Predicate> {
    if filters.is_empty() {
        return Ok(Predicate::default());
    }
    let schema = registry.get(entity)?;
    compile(filters, schema, root_alias)
}

/// Resolve a field path into a query reference, appending any joins the
/// traversal needs that are not already present.
fn resolve_path(joins: &mut Vec<Join>, path: &str, root_alias: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() == 1 {
        return format!("{root_alias}.{path}");
    }

    let mut current_alias = root_alias.to_string();
    for relation in &parts[..parts.len() - 1] {
        let join_alias = format!("{relation}_filter");
        let exists = joins
            .iter()
            .any(|j| j.parent_alias == current_alias && j.alias == join_alias);
        if !exists {
            joins.push(Join {
                parent_alias: current_alias.clone(),
                relation: relation.to_string(),
                alias: join_alias.clone(),
            });
        }
        current_alias = join_alias;
    }

    format!("{}.{}", current_alias, parts[parts.len() - 1])
}
