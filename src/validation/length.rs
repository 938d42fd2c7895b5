//! Width and nullability checks for bounded text fields

use crate::entity::EntityMetadata;
use crate::error::{MappingError, MappingResult};
use crate::schema::SemanticType;

/// Check a text value against the declared width of `field`'s column
///
/// The field is resolved through the mapping table to its column, whose
/// definition supplies width and nullability. Text is trimmed of
/// surrounding whitespace before it is measured, so fixed-width padding in
/// legacy `CHAR` columns does not count against the width.
///
/// # Rules
///
/// - Null is accepted only if `allow_null` is set and the column is nullable
/// - Blank text is accepted only if `allow_blank` is set
/// - Text wider than the column's `max_length` (in characters) fails
pub fn check_length(
    meta: &EntityMetadata,
    value: Option<&str>,
    field: &str,
    allow_null: bool,
    allow_blank: bool,
) -> MappingResult<Option<String>> {
    let column = meta.column_for(field)?;

    let Some(raw) = value else {
        if allow_null && column.nullable {
            return Ok(None);
        }
        return Err(MappingError::null_field(meta.kind(), field));
    };

    let text = if column.semantic_type == SemanticType::Text {
        raw.trim()
    } else {
        raw
    };

    if text.is_empty() && !allow_blank {
        return Err(MappingError::null_field(meta.kind(), field));
    }

    if let Some(max) = column.max_length {
        let actual = text.chars().count();
        if actual > max {
            return Err(MappingError::LengthExceeded {
                column: column.name.clone(),
                max,
                actual,
            });
        }
    }

    Ok(Some(text.to_string()))
}

/// [`check_length`] for fields that never hold null
pub fn check_required(
    meta: &EntityMetadata,
    value: &str,
    field: &str,
    allow_blank: bool,
) -> MappingResult<String> {
    check_length(meta, Some(value), field, false, allow_blank)?
        .ok_or_else(|| MappingError::null_field(meta.kind(), field))
}
