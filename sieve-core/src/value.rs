//! Field value kinds and cast rules
//!
//! Filter values always arrive as strings on the wire; each filterable field
//! declares the kind its raw values are cast to before binding.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Semantic type of a filterable field, driving value casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Raw value passes through unchanged
    String,
    /// Integer parse; non-numeric input is rejected
    Int,
    /// ISO-8601-compatible timestamp parse; invalid input is rejected
    Date,
    /// Permissive boolean coercion; never fails
    Bool,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::String => "string",
            FieldKind::Int => "int",
            FieldKind::Date => "date",
            FieldKind::Bool => "bool",
        };
        f.write_str(s)
    }
}

/// A cast filter value, ready to be bound as a query parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    Date(DateTime<Utc>),
    Bool(bool),
    /// Element-wise cast list for `in`/`not_in`
    List(Vec<FilterValue>),
}

/// Failure to interpret a raw string as the declared field kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot interpret {value:?} as {kind}")]
pub struct CastError {
    pub value: String,
    pub kind: FieldKind,
}

impl FieldKind {
    /// Cast a single raw value to this kind.
    ///
    /// Bool coercion is total: `true`/`1`/`yes` (case-insensitive) are true,
    /// anything else is false. Int and date reject malformed input.
    pub fn cast(&self, raw: &str) -> Result<FilterValue, CastError> {
        match self {
            FieldKind::String => Ok(FilterValue::Str(raw.to_string())),
            FieldKind::Int => raw
                .trim()
                .parse::<i64>()
                .map(FilterValue::Int)
                .map_err(|_| CastError {
                    value: raw.to_string(),
                    kind: *self,
                }),
            FieldKind::Date => parse_timestamp(raw)
                .map(FilterValue::Date)
                .ok_or_else(|| CastError {
                    value: raw.to_string(),
                    kind: *self,
                }),
            FieldKind::Bool => {
                let truthy = matches!(
                    raw.trim().to_ascii_lowercase().as_str(),
                    "true" | "1" | "yes"
                );
                Ok(FilterValue::Bool(truthy))
            }
        }
    }

    /// Cast a comma-separated raw value element-wise, trimming each element.
    pub fn cast_list(&self, raw: &str) -> Result<FilterValue, CastError> {
        let items = raw
            .split(',')
            .map(|item| self.cast(item.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FilterValue::List(items))
    }
}

/// Parse an ISO-8601-compatible timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD`
/// (interpreted as midnight UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}
