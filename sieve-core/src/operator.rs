//! Filter operator vocabulary
//!
//! The closed set of comparison operators accepted on the wire. Operator
//! strings are a stable contract: `eq, ne, gt, lt, gte, lte, in, not_in,
//! like, starts_with, ends_with`. Nothing else is ever accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator for a single filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Equal to
    Eq,
    /// Not equal to
    Ne,
    /// Greater than
    Gt,
    /// Less than
    Lt,
    /// Greater than or equal
    Gte,
    /// Less than or equal
    Lte,
    /// Member of a comma-separated value list
    In,
    /// Not a member of a comma-separated value list
    NotIn,
    /// Substring match (wildcards on both sides)
    Like,
    /// Prefix match (wildcard on the right)
    StartsWith,
    /// Suffix match (wildcard on the left)
    EndsWith,
}

impl FilterOperator {
    /// The full operator vocabulary, in wire-contract order.
    pub const ALL: [FilterOperator; 11] = [
        FilterOperator::Eq,
        FilterOperator::Ne,
        FilterOperator::Gt,
        FilterOperator::Lt,
        FilterOperator::Gte,
        FilterOperator::Lte,
        FilterOperator::In,
        FilterOperator::NotIn,
        FilterOperator::Like,
        FilterOperator::StartsWith,
        FilterOperator::EndsWith,
    ];

    /// Parse a wire string into an operator. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<FilterOperator> {
        match s {
            "eq" => Some(FilterOperator::Eq),
            "ne" => Some(FilterOperator::Ne),
            "gt" => Some(FilterOperator::Gt),
            "lt" => Some(FilterOperator::Lt),
            "gte" => Some(FilterOperator::Gte),
            "lte" => Some(FilterOperator::Lte),
            "in" => Some(FilterOperator::In),
            "not_in" => Some(FilterOperator::NotIn),
            "like" => Some(FilterOperator::Like),
            "starts_with" => Some(FilterOperator::StartsWith),
            "ends_with" => Some(FilterOperator::EndsWith),
            _ => None,
        }
    }

    /// Stable wire string for this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Gt => "gt",
            FilterOperator::Lt => "lt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lte => "lte",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not_in",
            FilterOperator::Like => "like",
            FilterOperator::StartsWith => "starts_with",
            FilterOperator::EndsWith => "ends_with",
        }
    }

    /// Whether the raw value is a comma-separated list, cast element-wise.
    pub fn requires_list_value(&self) -> bool {
        matches!(self, FilterOperator::In | FilterOperator::NotIn)
    }

    /// Whether this operator binds a wildcard pattern rather than a cast value.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            FilterOperator::Like | FilterOperator::StartsWith | FilterOperator::EndsWith
        )
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOperator::parse(s).ok_or(())
    }
}
