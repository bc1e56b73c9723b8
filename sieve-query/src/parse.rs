//! Filter request parsing
//!
//! Turns the raw `filters` query parameter (a JSON array of
//! `{field, operator, value}` objects) into a [`FilterCollection`]. Only
//! structural shape is validated here; field and operator semantics are
//! checked by the compiler against the entity schema.

use sieve_core::{FilterCollection, FilterError, FilterRequest, FilterResult};

/// Parse an optional serialized filter array.
///
/// - `None` means "no filters" and yields an empty collection.
/// - Malformed JSON or a non-array document fails with `InvalidFormat`.
/// - Array elements that are not objects are skipped.
/// - Missing `field`/`operator`/`value` keys default to the empty string;
///   downstream schema validation rejects them against any real schema.
pub fn parse_filters(raw: Option<&str>) -> FilterResult<FilterCollection> {
    let Some(raw) = raw else {
        return Ok(FilterCollection::default());
    };

    let elements: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| FilterError::InvalidFormat {
            reason: e.to_string(),
        })?;

    let mut filters = Vec::with_capacity(elements.len());
    for element in elements {
        if !element.is_object() {
            continue;
        }
        let filter: FilterRequest =
            serde_json::from_value(element).map_err(|e| FilterError::InvalidFormat {
                reason: e.to_string(),
            })?;
        filters.push(filter);
    }

    Ok(FilterCollection::new(filters))
}
