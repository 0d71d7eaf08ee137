use serde_json::Value;

use gdforge_schema::{
    field_meta, resolve, FieldMeta, ObjSchema, Schema, SchemaRegistry, UiHint, UnionSchema,
};

use crate::expand::ExpandedPaths;
use crate::row::{EditorKind, Row, RowDetail, VariantChoice};

/// Recursion stops past this depth with a terminal row; bounds pathological
/// self-referential data.
pub const MAX_DEPTH: usize = 10;

// Stand-in for absent data while recursing over schema shape alone.
static NULL: Value = Value::Null;

/// Derive the ordered row list for `data` under a root object `schema`.
///
/// Pure: identical inputs produce structurally identical output, and the
/// draft is never touched — mutations go through the helpers in
/// [`crate::mutate`]. Fields render in declaration order; hidden fields are
/// skipped; unresolvable nodes degrade to opaque read-only rows.
pub fn build_rows(
    schema: &Schema,
    data: &Value,
    expanded: &ExpandedPaths,
    registry: &SchemaRegistry,
) -> Vec<Row> {
    let mut rows = Vec::new();
    if let Ok(resolved) = resolve(schema, registry) {
        if let Schema::Obj(obj) = resolved.node {
            build_object_rows(&mut rows, obj, data, "", 0, expanded, registry);
        }
    }
    rows
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn build_object_rows(
    rows: &mut Vec<Row>,
    obj: &ObjSchema,
    data: &Value,
    prefix: &str,
    depth: usize,
    expanded: &ExpandedPaths,
    registry: &SchemaRegistry,
) {
    if depth > MAX_DEPTH {
        rows.push(Row {
            path: prefix.to_string(),
            depth: MAX_DEPTH,
            label: "Max depth reached".to_string(),
            description: None,
            schema: Schema::Obj(obj.clone()),
            expanded: false,
            detail: RowDetail::MaxDepth,
        });
        return;
    }

    for field in &obj.fields {
        let meta = field_meta(&field.name, &field.schema);
        if meta.ui_hint == Some(UiHint::Hidden) {
            continue;
        }
        let path = join_path(prefix, &field.name);
        let value = data.get(field.name.as_str());

        let resolved = match resolve(&field.schema, registry) {
            Ok(resolved) => resolved.node.clone(),
            Err(_) => {
                rows.push(Row {
                    path,
                    depth,
                    label: meta.label,
                    description: meta.description,
                    schema: field.schema.clone(),
                    expanded: false,
                    detail: RowDetail::Opaque,
                });
                continue;
            }
        };

        match &resolved {
            Schema::Obj(nested) => {
                let is_expanded = expanded.is_expanded(&path);
                rows.push(Row {
                    path: path.clone(),
                    depth,
                    label: meta.label,
                    description: meta.description,
                    schema: resolved.clone(),
                    expanded: is_expanded,
                    detail: RowDetail::Object { member_count: nested.fields.len() },
                });
                if is_expanded {
                    build_object_rows(
                        rows,
                        nested,
                        value.unwrap_or(&NULL),
                        &path,
                        depth + 1,
                        expanded,
                        registry,
                    );
                }
            }
            Schema::Union(union) => {
                // a union directly in field position renders through the
                // shape of the variant matching the data
                let item = value.unwrap_or(&NULL);
                let variant = union.display_variant(item);
                let member_count = variant.map(|v| v.fields.len()).unwrap_or(0);
                let is_expanded = expanded.is_expanded(&path);
                rows.push(Row {
                    path: path.clone(),
                    depth,
                    label: meta.label,
                    description: meta.description,
                    schema: resolved.clone(),
                    expanded: is_expanded,
                    detail: RowDetail::Object { member_count },
                });
                if is_expanded {
                    if let Some(variant) = variant {
                        build_object_rows(rows, variant, item, &path, depth + 1, expanded, registry);
                    }
                }
            }
            Schema::Arr(arr) => {
                build_array_rows(rows, arr.element.as_ref(), value, &path, depth, &meta, &resolved, expanded, registry);
            }
            leaf => {
                let editor = editor_for(leaf, &meta);
                rows.push(Row {
                    path,
                    depth,
                    label: meta.label,
                    description: meta.description,
                    schema: resolved.clone(),
                    expanded: false,
                    detail: RowDetail::Leaf { editor },
                });
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build_array_rows(
    rows: &mut Vec<Row>,
    element: &Schema,
    value: Option<&Value>,
    path: &str,
    depth: usize,
    meta: &FieldMeta,
    array_schema: &Schema,
    expanded: &ExpandedPaths,
    registry: &SchemaRegistry,
) {
    let element_node = match resolve(element, registry) {
        Ok(resolved) => resolved.node.clone(),
        Err(_) => {
            rows.push(Row {
                path: path.to_string(),
                depth,
                label: meta.label.clone(),
                description: meta.description.clone(),
                schema: array_schema.clone(),
                expanded: false,
                detail: RowDetail::Opaque,
            });
            return;
        }
    };

    let complex = matches!(element_node, Schema::Obj(_) | Schema::Union(_));
    if !complex {
        // an array of primitives edits as one literal structured list
        rows.push(Row {
            path: path.to_string(),
            depth,
            label: meta.label.clone(),
            description: meta.description.clone(),
            schema: array_schema.clone(),
            expanded: false,
            detail: RowDetail::Leaf { editor: EditorKind::LiteralList },
        });
        return;
    }

    let items = value.and_then(Value::as_array);
    let element_count = items.map(|a| a.len()).unwrap_or(0);
    let is_expanded = expanded.is_expanded(path);
    rows.push(Row {
        path: path.to_string(),
        depth,
        label: meta.label.clone(),
        description: meta.description.clone(),
        schema: array_schema.clone(),
        expanded: is_expanded,
        detail: RowDetail::Array { element_count },
    });

    if !is_expanded {
        return;
    }
    let Some(items) = items else { return };

    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{path}[{index}]");
        let item_expanded = expanded.is_expanded(&item_path);

        let (variant, item_shape): (Option<VariantChoice>, Option<&ObjSchema>) = match &element_node
        {
            Schema::Union(union) => (
                Some(variant_choice(union, item)),
                union.display_variant(item),
            ),
            Schema::Obj(obj) => (None, Some(obj)),
            _ => (None, None),
        };

        rows.push(Row {
            path: item_path.clone(),
            depth: depth + 2,
            label: format!("Item {}", index + 1),
            description: None,
            schema: item_shape
                .map(|shape| Schema::Obj(shape.clone()))
                .unwrap_or_else(|| element_node.clone()),
            expanded: item_expanded,
            detail: RowDetail::ArrayItem { index, variant },
        });

        if item_expanded {
            if let Some(shape) = item_shape {
                build_object_rows(rows, shape, item, &item_path, depth + 2, expanded, registry);
            }
        }
    }
}

fn variant_choice(union: &UnionSchema, item: &Value) -> VariantChoice {
    VariantChoice {
        current: item
            .get(union.discriminator.as_str())
            .and_then(Value::as_str)
            .map(str::to_string),
        options: union.tags().iter().map(|tag| tag.to_string()).collect(),
    }
}

fn editor_for(node: &Schema, meta: &FieldMeta) -> EditorKind {
    match node {
        Schema::Enum(e) => EditorKind::Select(e.options.clone()),
        Schema::Str(_) => match &meta.ui_hint {
            Some(UiHint::Formula) => EditorKind::Formula,
            Some(UiHint::EntityReference { collection }) => {
                EditorKind::EntityReference(collection.clone())
            }
            _ => EditorKind::Text,
        },
        Schema::Num(_) => EditorKind::Number,
        Schema::Bool(_) => EditorKind::Checkbox,
        _ => EditorKind::ReadOnly,
    }
}
