use serde_json::Value;

use crate::types::{Path, PathError, Step};

/// Immutable navigation to the value at `path`.
pub fn get<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = doc;
    for step in &path.steps {
        current = match (step, current) {
            (Step::Key(key), Value::Object(map)) => map.get(key)?,
            (Step::Index(index), Value::Array(arr)) => arr.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable navigation to the value at `path` (every step must exist).
pub fn get_mut<'a>(doc: &'a mut Value, path: &Path) -> Result<&'a mut Value, PathError> {
    let mut current = doc;
    for step in &path.steps {
        current = match (step, current) {
            (Step::Key(key), Value::Object(map)) => {
                map.get_mut(key).ok_or(PathError::NotFound)?
            }
            (Step::Index(index), Value::Array(arr)) => {
                arr.get_mut(*index).ok_or(PathError::NotFound)?
            }
            _ => return Err(PathError::NotAContainer),
        };
    }
    Ok(current)
}

/// Write `value` at `path`, returning the previous value if one existed.
///
/// Inserting a new object member is allowed (the member is created); array
/// writes replace an existing element and never grow the array.
pub fn set(doc: &mut Value, path: &Path, value: Value) -> Result<Option<Value>, PathError> {
    if path.is_root() {
        let old = std::mem::replace(doc, value);
        return Ok(Some(old));
    }
    let (parent_path, last) = path.split_last().ok_or(PathError::NotFound)?;
    let parent = get_mut(doc, &parent_path)?;
    match (last, parent) {
        (Step::Key(key), Value::Object(map)) => Ok(map.insert(key.clone(), value)),
        (Step::Index(index), Value::Array(arr)) => {
            let slot = arr.get_mut(*index).ok_or(PathError::OutOfBounds)?;
            Ok(Some(std::mem::replace(slot, value)))
        }
        _ => Err(PathError::NotAContainer),
    }
}

/// Remove and return the value at `path`.
pub fn remove(doc: &mut Value, path: &Path) -> Result<Value, PathError> {
    let (parent_path, last) = path.split_last().ok_or(PathError::NotAContainer)?;
    let parent = get_mut(doc, &parent_path)?;
    match (last, parent) {
        (Step::Key(key), Value::Object(map)) => map.shift_remove(key).ok_or(PathError::NotFound),
        (Step::Index(index), Value::Array(arr)) => {
            if *index >= arr.len() {
                return Err(PathError::NotFound);
            }
            Ok(arr.remove(*index))
        }
        _ => Err(PathError::NotAContainer),
    }
}

/// Reorder one element of the array at `path` from `from` to `to`.
///
/// This is a move, not a resort: the element is lifted out and reinserted at
/// the target position, shifting its neighbors.
pub fn move_item(doc: &mut Value, path: &Path, from: usize, to: usize) -> Result<(), PathError> {
    let target = get_mut(doc, path)?;
    let arr = target.as_array_mut().ok_or(PathError::NotAContainer)?;
    if from >= arr.len() || to >= arr.len() {
        return Err(PathError::OutOfBounds);
    }
    let item = arr.remove(from);
    arr.insert(to, item);
    Ok(())
}
