use crate::meta::{field_meta, UiHint};
use crate::registry::SchemaRegistry;
use crate::resolve::resolve;
use crate::schema::{ObjSchema, Schema};

/// One column of a tabular record summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub label: String,
}

/// Scalar, non-hidden fields of `obj` in declaration order.
///
/// Complex fields (objects, arrays, unions, references) carry too much
/// structure for a table cell and are excluded, as is anything hidden by
/// its metadata — at any depth, a hidden field never surfaces.
pub fn visible_columns(obj: &ObjSchema, registry: &SchemaRegistry) -> Vec<Column> {
    let mut columns = Vec::new();
    for field in &obj.fields {
        let meta = field_meta(&field.name, &field.schema);
        if meta.ui_hint == Some(UiHint::Hidden) {
            continue;
        }
        let scalar = match resolve(&field.schema, registry) {
            Ok(resolved) => matches!(
                resolved.node,
                Schema::Str(_) | Schema::Num(_) | Schema::Bool(_) | Schema::Enum(_) | Schema::Lit(_)
            ),
            Err(_) => false,
        };
        if scalar {
            // Tabular headers prefer the human-readable description text.
            let label = meta.description.unwrap_or(meta.label);
            columns.push(Column {
                name: field.name.clone(),
                label,
            });
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SchemaBuilder;

    #[test]
    fn scalars_only_in_declaration_order() {
        let b = SchemaBuilder::new();
        let schema = b.obj(vec![
            b.field("Name", b.str()),
            b.field("Lifetime", b.num()),
            b.field("Triggers", b.arr(b.obj(vec![b.field("Time", b.num())]))),
        ]);
        let obj = match &schema {
            Schema::Obj(o) => o,
            _ => unreachable!(),
        };
        let columns = visible_columns(obj, &SchemaRegistry::new());
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Name", "Lifetime"]);
    }

    #[test]
    fn hidden_fields_are_excluded() {
        let b = SchemaBuilder::new();
        let schema = b.obj(vec![
            b.field(
                "type",
                b.lit("Damage").described(r#"{"specialType": "hidden"}"#),
            ),
            b.field("Potency", b.num()),
        ]);
        let obj = match &schema {
            Schema::Obj(o) => o,
            _ => unreachable!(),
        };
        let columns = visible_columns(obj, &SchemaRegistry::new());
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "Potency");
    }

    #[test]
    fn labels_come_from_metadata() {
        let b = SchemaBuilder::new();
        let schema = b.obj(vec![b.field(
            "Period",
            b.num().described(r#"{"description": "Time between ticks in seconds"}"#),
        )]);
        let obj = match &schema {
            Schema::Obj(o) => o,
            _ => unreachable!(),
        };
        let columns = visible_columns(obj, &SchemaRegistry::new());
        assert_eq!(columns[0].label, "Time between ticks in seconds");
    }

    #[test]
    fn optional_scalar_is_visible() {
        let b = SchemaBuilder::new();
        let schema = b.obj(vec![b.field("MaxStacks", b.opt(b.num()))]);
        let obj = match &schema {
            Schema::Obj(o) => o,
            _ => unreachable!(),
        };
        assert_eq!(visible_columns(obj, &SchemaRegistry::new()).len(), 1);
    }
}
