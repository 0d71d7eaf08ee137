use serde_json::Value;

use gdforge_path::{Path, Step};
use gdforge_schema::{resolve, Schema, SchemaRegistry};

static NULL: Value = Value::Null;

/// The canonical schema node addressed by `path` into `data`.
///
/// Walks schema and data in parallel: object members through their field
/// schemas, array indices through the element schema, union members through
/// the variant matching the data at that point (first variant as fallback).
/// Returns `None` when the path leaves the schema.
pub fn schema_at(
    schema: &Schema,
    data: &Value,
    path: &Path,
    registry: &SchemaRegistry,
) -> Option<Schema> {
    let mut node = resolve(schema, registry).ok()?.node.clone();
    let mut cursor: Option<&Value> = Some(data);

    for step in &path.steps {
        let next_schema = match (step, &node) {
            (Step::Key(key), Schema::Obj(obj)) => obj.field(key)?.schema.clone(),
            (Step::Key(key), Schema::Union(union)) => {
                let here = cursor.unwrap_or(&NULL);
                union.display_variant(here)?.field(key)?.schema.clone()
            }
            (Step::Index(_), Schema::Arr(arr)) => arr.element.as_ref().clone(),
            _ => return None,
        };
        cursor = cursor.and_then(|value| match step {
            Step::Key(key) => value.get(key.as_str()),
            Step::Index(index) => value.get(index),
        });
        node = resolve(&next_schema, registry).ok()?.node.clone();
    }
    Some(node)
}
