//! Zero-value synthesis for freshly created data.

use serde_json::{json, Map, Value};

use crate::registry::SchemaRegistry;
use crate::resolve::resolve;
use crate::schema::{ObjSchema, Schema, UnionSchema};

// Bounds default synthesis over self-referential types.
const MAX_DEFAULT_DEPTH: usize = 10;

/// The type-appropriate zero value for a node: empty string, zero, false,
/// first enum option, the literal's value, empty list, empty object.
///
/// Used when variants are synthesized and when new array items are appended;
/// this is default synthesis only, not validation.
pub fn zero_value(node: &Schema, registry: &SchemaRegistry) -> Value {
    zero_value_at(node, registry, 0)
}

fn zero_value_at(node: &Schema, registry: &SchemaRegistry, depth: usize) -> Value {
    if depth > MAX_DEFAULT_DEPTH {
        return Value::Null;
    }
    let resolved = match resolve(node, registry) {
        Ok(resolved) => resolved,
        Err(_) => return Value::Null,
    };
    match resolved.node {
        Schema::Str(_) => json!(""),
        Schema::Num(_) => json!(0),
        Schema::Bool(_) => json!(false),
        Schema::Enum(e) => json!(e.options.first().cloned().unwrap_or_default()),
        Schema::Lit(lit) => lit.value.clone(),
        Schema::Arr(_) => json!([]),
        Schema::Obj(_) => json!({}),
        Schema::Union(u) => u
            .variants
            .first()
            .map(|v| variant_default_at(u, v, registry, depth + 1))
            .unwrap_or_else(|| json!({})),
        // resolve() never returns these
        Schema::Opt(_) | Schema::Ref(_) => Value::Null,
    }
}

/// Synthesize a default object for one union variant: the discriminator gets
/// its literal tag, every other non-optional field gets its zero value, and
/// optional fields stay absent.
pub fn variant_default(
    union: &UnionSchema,
    variant: &ObjSchema,
    registry: &SchemaRegistry,
) -> Value {
    variant_default_at(union, variant, registry, 0)
}

fn variant_default_at(
    _union: &UnionSchema,
    variant: &ObjSchema,
    registry: &SchemaRegistry,
    depth: usize,
) -> Value {
    let mut map = Map::new();
    for field in &variant.fields {
        if matches!(field.schema, Schema::Opt(_)) {
            continue;
        }
        map.insert(
            field.name.clone(),
            zero_value_at(&field.schema, registry, depth + 1),
        );
    }
    Value::Object(map)
}
