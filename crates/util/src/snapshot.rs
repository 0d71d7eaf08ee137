use serde_json::{Map, Value};

/// Creates a deep, independent copy of a JSON value.
///
/// Used for draft buffers and undo history entries: the copy shares no
/// structure with the original, so later in-place mutation of either side
/// cannot leak into the other.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use gdforge_util::snapshot;
///
/// let original = json!({"OnTick": [{"type": "Heal", "Potency": 50}]});
/// let copy = snapshot(&original);
/// assert_eq!(original, copy);
/// ```
pub fn snapshot(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(snapshot).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (key, val) in obj {
                new_obj.insert(key.clone(), snapshot(val));
            }
            Value::Object(new_obj)
        }
    }
}
