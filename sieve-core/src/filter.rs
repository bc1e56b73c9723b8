//! Raw filter request DTOs
//!
//! A [`FilterRequest`] is one untrusted `{field, operator, value}` triple as
//! transmitted by the caller. Values are always strings on the wire, even
//! for int/date/bool fields; casting happens during compilation. Semantic
//! validation (field allow-listing, operator checks) is the compiler's job,
//! not this type's.

use serde::{Deserialize, Serialize};

/// One raw filter criterion from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FilterRequest {
    /// Field to filter on; supports nested paths like `author.firstName`
    #[serde(default)]
    pub field: String,
    /// Wire operator string, e.g. `eq` or `starts_with`
    #[serde(default)]
    pub operator: String,
    /// Raw value; comma-separated for `in`/`not_in`
    #[serde(default)]
    pub value: String,
}

impl FilterRequest {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of filter requests, combined conjunctively.
///
/// Order does not affect result correctness (clauses are ANDed); it only
/// determines parameter numbering in the compiled predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct FilterCollection {
    filters: Vec<FilterRequest>,
}

impl FilterCollection {
    pub fn new(filters: Vec<FilterRequest>) -> Self {
        Self { filters }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterRequest> {
        self.filters.iter()
    }

    pub fn push(&mut self, filter: FilterRequest) {
        self.filters.push(filter);
    }
}

impl From<Vec<FilterRequest>> for FilterCollection {
    fn from(filters: Vec<FilterRequest>) -> Self {
        Self::new(filters)
    }
}

impl IntoIterator for FilterCollection {
    type Item = FilterRequest;
    type IntoIter = std::vec::IntoIter<FilterRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterCollection {
    type Item = &'a FilterRequest;
    type IntoIter = std::slice::Iter<'a, FilterRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
