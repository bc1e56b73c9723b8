//! In-memory predicate execution
//!
//! A [`PredicateExecutor`] that evaluates compiled predicates against rows
//! held in memory. Used by the integration tests and by small deployments
//! that have no database behind the list endpoints. Rows expose their field
//! values through [`FieldAccess`], keyed by the compiler's resolved
//! references (`p.title`, `author_filter.firstName`, ...).

use crate::compile::{Clause, Predicate};
use crate::paginate::PredicateExecutor;
use async_trait::async_trait;
use sieve_core::{FilterOperator, FilterValue};
use std::cmp::Ordering;
use std::convert::Infallible;

/// Row-side access to field values by resolved query reference.
pub trait FieldAccess {
    /// The row's value for a reference, or `None` when the reference does
    /// not apply (e.g. a missing to-one relation).
    fn field(&self, reference: &str) -> Option<FilterValue>;
}

/// Executes predicates over an owned row set.
#[derive(Debug, Clone, Default)]
pub struct MemoryExecutor<T> {
    rows: Vec<T>,
}

impl<T: FieldAccess> MemoryExecutor<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a row satisfies every clause of the predicate.
    pub fn matches(row: &T, predicate: &Predicate) -> bool {
        predicate.clauses.iter().all(|c| clause_matches(row, c))
    }
}

#[async_trait]
impl<T> PredicateExecutor<T> for MemoryExecutor<T>
where
    T: FieldAccess + Clone + Send + Sync,
{
    type Error = Infallible;

    async fn count(&self, predicate: &Predicate) -> Result<u64, Infallible> {
        let n = self
            .rows
            .iter()
            .filter(|row| Self::matches(row, predicate))
            .count();
        Ok(n as u64)
    }

    async fn fetch(
        &self,
        predicate: &Predicate,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<T>, Infallible> {
        Ok(self
            .rows
            .iter()
            .filter(|row| Self::matches(row, predicate))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

fn clause_matches<T: FieldAccess>(row: &T, clause: &Clause) -> bool {
    let Some(actual) = row.field(&clause.reference) else {
        return false;
    };

    match clause.operator {
        FilterOperator::Eq => compare(&actual, &clause.value) == Some(Ordering::Equal),
        FilterOperator::Ne => {
            matches!(compare(&actual, &clause.value), Some(o) if o != Ordering::Equal)
        }
        FilterOperator::Gt => compare(&actual, &clause.value) == Some(Ordering::Greater),
        FilterOperator::Lt => compare(&actual, &clause.value) == Some(Ordering::Less),
        FilterOperator::Gte => {
            matches!(compare(&actual, &clause.value), Some(o) if o != Ordering::Less)
        }
        FilterOperator::Lte => {
            matches!(compare(&actual, &clause.value), Some(o) if o != Ordering::Greater)
        }
        FilterOperator::In => list_contains(&clause.value, &actual),
        FilterOperator::NotIn => match &clause.value {
            FilterValue::List(_) => !list_contains(&clause.value, &actual),
            _ => false,
        },
        FilterOperator::Like | FilterOperator::StartsWith | FilterOperator::EndsWith => {
            match (&actual, &clause.value) {
                (FilterValue::Str(text), FilterValue::Str(pattern)) => like_match(text, pattern),
                _ => false,
            }
        }
    }
}

fn list_contains(list: &FilterValue, actual: &FilterValue) -> bool {
    match list {
        FilterValue::List(items) => items
            .iter()
            .any(|item| compare(actual, item) == Some(Ordering::Equal)),
        _ => false,
    }
}

/// Compare two scalar values of the same kind; mismatched kinds and lists
/// are incomparable.
fn compare(a: &FilterValue, b: &FilterValue) -> Option<Ordering> {
    match (a, b) {
        (FilterValue::Str(x), FilterValue::Str(y)) => Some(x.cmp(y)),
        (FilterValue::Int(x), FilterValue::Int(y)) => Some(x.cmp(y)),
        (FilterValue::Date(x), FilterValue::Date(y)) => Some(x.cmp(y)),
        (FilterValue::Bool(x), FilterValue::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// SQL `LIKE` semantics with `%` as a multi-character wildcard,
/// case-sensitive. Literal `%` in the pattern is not escapable; the
/// compiler documents the same gap.
fn like_match(text: &str, pattern: &str) -> bool {
    let segments: Vec<&str> = pattern.split('%').collect();
    if segments.len() == 1 {
        return text == pattern;
    }

    let first = segments[0];
    let last = segments[segments.len() - 1];
    if !text.starts_with(first) {
        return false;
    }
    let mut rest = &text[first.len()..];

    for segment in &segments[1..segments.len() - 1] {
        if segment.is_empty() {
            continue;
        }
        match rest.find(segment) {
            Some(i) => rest = &rest[i + segment.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}
