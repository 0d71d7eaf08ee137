use serde_json::Value;

/// Performs a deep equality check between two JSON values.
///
/// Objects compare key-by-key regardless of key order; arrays compare
/// element-by-element in order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use gdforge_util::deep_equal;
///
/// let a = json!({"Name": "Fireball", "Triggers": [1, 2]});
/// let b = json!({"Triggers": [1, 2], "Name": "Fireball"});
/// let c = json!({"Name": "Fireball", "Triggers": [1, 3]});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b.iter()).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            obj_a.len() == obj_b.len()
                && obj_a.iter().all(|(key, val_a)| {
                    obj_b.get(key).map(|val_b| deep_equal(val_a, val_b)).unwrap_or(false)
                })
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives() {
        assert!(deep_equal(&json!(null), &json!(null)));
        assert!(deep_equal(&json!(true), &json!(true)));
        assert!(deep_equal(&json!(42), &json!(42)));
        assert!(deep_equal(&json!("x"), &json!("x")));
        assert!(!deep_equal(&json!(42), &json!("42")));
        assert!(!deep_equal(&json!(1), &json!(2)));
    }

    #[test]
    fn integer_and_float_are_distinct() {
        assert!(!deep_equal(&json!(10), &json!(10.5)));
    }

    #[test]
    fn nested_structures() {
        let a = json!({"Triggers": [{"Time": 0.25, "Actions": []}]});
        let b = json!({"Triggers": [{"Time": 0.25, "Actions": []}]});
        let c = json!({"Triggers": [{"Time": 0.5, "Actions": []}]});
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn object_key_order_is_ignored() {
        let a = json!({"x": 1, "y": 2});
        let b = json!({"y": 2, "x": 1});
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn missing_key_is_not_null() {
        let a = json!({"x": 1});
        let b = json!({"x": 1, "y": null});
        assert!(!deep_equal(&a, &b));
    }
}
