//! Structural mutation helpers.
//!
//! Each helper takes the current draft by reference and returns a new draft
//! with the change applied — callers swap the whole buffer, re-derive rows,
//! and push the previous draft onto their undo history.

use serde_json::{json, Map, Value};
use thiserror::Error;

use gdforge_path::{get, get_mut, move_item, parse_path, remove, set, PathError};
use gdforge_schema::{zero_value, Schema, SchemaRegistry, UnionSchema};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutateError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("path does not address an array")]
    NotAnArray,

    #[error("path does not address an object")]
    NotAnObject,

    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
}

/// Replace the value at `path`.
pub fn set_value(draft: &Value, path: &str, new_value: Value) -> Result<Value, MutateError> {
    let parsed = parse_path(path)?;
    let mut next = draft.clone();
    set(&mut next, &parsed, new_value)?;
    Ok(next)
}

/// Append a synthesized default element to the array at `array_path`.
///
/// For a tagged-union element the default is the first declared variant's
/// object. An absent optional array is created with the new item as its
/// only element.
pub fn append_item(
    draft: &Value,
    array_path: &str,
    element: &Schema,
    registry: &SchemaRegistry,
) -> Result<Value, MutateError> {
    let parsed = parse_path(array_path)?;
    let item = zero_value(element, registry);
    let mut next = draft.clone();
    match get_mut(&mut next, &parsed) {
        Ok(Value::Array(arr)) => {
            arr.push(item);
            Ok(next)
        }
        Ok(_) => Err(MutateError::NotAnArray),
        Err(PathError::NotFound) => {
            set(&mut next, &parsed, json!([item]))?;
            Ok(next)
        }
        Err(err) => Err(err.into()),
    }
}

/// Delete one element of the array at `array_path`.
pub fn delete_item(draft: &Value, array_path: &str, index: usize) -> Result<Value, MutateError> {
    let parsed = parse_path(array_path)?.item(index);
    let mut next = draft.clone();
    remove(&mut next, &parsed)?;
    Ok(next)
}

/// Empty the array at `array_path`.
pub fn clear_array(draft: &Value, array_path: &str) -> Result<Value, MutateError> {
    let parsed = parse_path(array_path)?;
    let mut next = draft.clone();
    match get_mut(&mut next, &parsed) {
        Ok(Value::Array(arr)) => {
            arr.clear();
            Ok(next)
        }
        Ok(_) => Err(MutateError::NotAnArray),
        Err(err) => Err(err.into()),
    }
}

/// Reorder one element of the array at `array_path` — a move, never a
/// resort.
pub fn move_array_item(
    draft: &Value,
    array_path: &str,
    from: usize,
    to: usize,
) -> Result<Value, MutateError> {
    let parsed = parse_path(array_path)?;
    let mut next = draft.clone();
    move_item(&mut next, &parsed, from, to)?;
    Ok(next)
}

/// Switch the item at `item_path` to the union variant tagged `new_tag`.
///
/// Same-named field values already present on the item are carried over;
/// every other declared field gets its type-appropriate zero value, and
/// optional fields stay absent. As much user input as possible survives the
/// type switch.
pub fn switch_variant(
    draft: &Value,
    item_path: &str,
    union: &UnionSchema,
    new_tag: &str,
    registry: &SchemaRegistry,
) -> Result<Value, MutateError> {
    let parsed = parse_path(item_path)?;
    let variant = union
        .variant_by_tag(new_tag)
        .ok_or_else(|| MutateError::UnknownVariant(new_tag.to_string()))?;
    let current = get(draft, &parsed).ok_or(MutateError::Path(PathError::NotFound))?;
    let current = current.as_object().ok_or(MutateError::NotAnObject)?;

    let mut item = Map::new();
    for field in &variant.fields {
        if field.name == union.discriminator {
            let tag_value = match &field.schema {
                Schema::Lit(lit) => lit.value.clone(),
                _ => Value::String(new_tag.to_string()),
            };
            item.insert(field.name.clone(), tag_value);
            continue;
        }
        if let Some(existing) = current.get(&field.name) {
            item.insert(field.name.clone(), existing.clone());
            continue;
        }
        if matches!(field.schema, Schema::Opt(_)) {
            continue;
        }
        item.insert(field.name.clone(), zero_value(&field.schema, registry));
    }

    let mut next = draft.clone();
    set(&mut next, &parsed, Value::Object(item))?;
    Ok(next)
}
