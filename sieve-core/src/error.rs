//! Error taxonomy for filter parsing and compilation
//!
//! Every variant is a request-scoped validation failure (HTTP 400 at the
//! outer layer), never fatal to the process. The compiler raises on the
//! first violation and returns no partial predicate.

use crate::value::FieldKind;
use serde::Serialize;
use thiserror::Error;

/// Filter validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Entity \"{entity}\" does not support filtering")]
    EntityNotFilterable { entity: String },

    #[error("Field \"{field}\" is not filterable")]
    InvalidField { field: String },

    #[error("Operator \"{operator}\" is not allowed for field \"{field}\". Allowed: {allowed}")]
    InvalidOperator {
        field: String,
        operator: String,
        /// Comma-separated wire strings of the operators the field accepts
        allowed: String,
    },

    #[error("Invalid value \"{value}\" for field \"{field}\": expected {kind}")]
    InvalidValue {
        field: String,
        value: String,
        kind: FieldKind,
    },

    #[error("Invalid JSON format for filters: {reason}")]
    InvalidFormat { reason: String },
}

/// Result type alias for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

impl FilterError {
    /// Stable wire error code for the outer error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::EntityNotFilterable { .. } => "ENTITY_NOT_FILTERABLE",
            FilterError::InvalidField { .. } => "INVALID_FILTER_FIELD",
            FilterError::InvalidOperator { .. } => "INVALID_FILTER_OPERATOR",
            FilterError::InvalidValue { .. } => "INVALID_FILTER_VALUE",
            FilterError::InvalidFormat { .. } => "INVALID_FILTER_FORMAT",
        }
    }

    /// The offending field, where the failure is field-scoped.
    pub fn field(&self) -> Option<&str> {
        match self {
            FilterError::InvalidField { field }
            | FilterError::InvalidOperator { field, .. }
            | FilterError::InvalidValue { field, .. } => Some(field),
            _ => None,
        }
    }

    /// The offending operator, for operator-scoped failures.
    pub fn operator(&self) -> Option<&str> {
        match self {
            FilterError::InvalidOperator { operator, .. } => Some(operator),
            _ => None,
        }
    }

    /// Build the structured payload surfaced in the HTTP error envelope.
    pub fn to_detail(&self) -> ErrorDetail {
        ErrorDetail {
            code: self.code(),
            field: self.field().map(str::to_string),
            operator: self.operator().map(str::to_string),
            message: self.to_string(),
        }
    }
}

/// Structured error payload: `{code, field?, operator?, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorDetail {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    pub message: String,
}
