//! Field metadata and the serialized side channel.
//!
//! A field's schema node may carry display metadata in its `description`
//! string: either plain help text, or a serialized JSON object of the form
//! `{"description": "...", "specialType": "...", "collection": "..."}`.
//! The side channel is how hosts attach labels and UI hints to fields
//! without extending the schema language itself.

use serde_json::Value;

use crate::schema::Schema;

/// How a field's editor should be specialized beyond its value kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiHint {
    /// Excluded from generated rows and visible-column projections.
    Hidden,
    /// String field holding an arithmetic formula; routed to the formula
    /// editing surface.
    Formula,
    /// Closed choice presented as a select control.
    EnumSelect,
    /// String field referencing a record identity in the named external
    /// collection.
    EntityReference { collection: String },
}

/// Display metadata resolved for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
    pub label: String,
    pub description: Option<String>,
    pub ui_hint: Option<UiHint>,
}

fn hint_from_special_type(meta: &serde_json::Map<String, Value>) -> Option<UiHint> {
    match meta.get("specialType")?.as_str()? {
        "hidden" => Some(UiHint::Hidden),
        "formula" => Some(UiHint::Formula),
        "enum" => Some(UiHint::EnumSelect),
        "entityReference" => {
            let collection = meta.get("collection")?.as_str()?.to_string();
            Some(UiHint::EntityReference { collection })
        }
        _ => None,
    }
}

/// Resolve the display metadata of a field named `name` with schema `node`.
///
/// The label defaults to the field name. If the node's description parses
/// as a metadata object, its `description` and `specialType` are used;
/// otherwise the description is plain help text. Explicit `SchemaBase`
/// values always win over the side channel.
pub fn field_meta(name: &str, node: &Schema) -> FieldMeta {
    let base = node.base();
    let mut meta = FieldMeta {
        label: base.label.clone().unwrap_or_else(|| name.to_string()),
        description: None,
        ui_hint: base.ui_hint.clone(),
    };

    if let Some(raw) = &base.description {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(side)) => {
                if let Some(text) = side.get("description").and_then(Value::as_str) {
                    meta.description = Some(text.to_string());
                }
                if meta.ui_hint.is_none() {
                    meta.ui_hint = hint_from_special_type(&side);
                }
            }
            _ => meta.description = Some(raw.clone()),
        }
    }

    meta
}

/// Whether a field is excluded from rows and column projections.
pub fn is_hidden(name: &str, node: &Schema) -> bool {
    field_meta(name, node).ui_hint == Some(UiHint::Hidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SchemaBuilder;

    #[test]
    fn plain_description_is_help_text() {
        let b = SchemaBuilder::new();
        let node = b.str().described("The name of the attribute.");
        let meta = field_meta("Name", &node);
        assert_eq!(meta.label, "Name");
        assert_eq!(meta.description.as_deref(), Some("The name of the attribute."));
        assert_eq!(meta.ui_hint, None);
    }

    #[test]
    fn side_channel_hidden() {
        let b = SchemaBuilder::new();
        let node = b
            .lit("Damage")
            .described(r#"{"description": "Callback type", "specialType": "hidden"}"#);
        let meta = field_meta("type", &node);
        assert_eq!(meta.description.as_deref(), Some("Callback type"));
        assert_eq!(meta.ui_hint, Some(UiHint::Hidden));
        assert!(is_hidden("type", &node));
    }

    #[test]
    fn side_channel_formula() {
        let b = SchemaBuilder::new();
        let node = b
            .str()
            .described(r#"{"specialType": "formula", "description": "The minimum value formula."}"#);
        let meta = field_meta("Min", &node);
        assert_eq!(meta.ui_hint, Some(UiHint::Formula));
    }

    #[test]
    fn side_channel_entity_reference() {
        let b = SchemaBuilder::new();
        let node = b.str().described(
            r#"{"description": "Effect name", "specialType": "entityReference", "collection": "effects"}"#,
        );
        let meta = field_meta("Name", &node);
        assert_eq!(
            meta.ui_hint,
            Some(UiHint::EntityReference { collection: "effects".to_string() })
        );
    }

    #[test]
    fn unknown_special_type_means_no_hint() {
        let b = SchemaBuilder::new();
        let node = b
            .num()
            .described(r#"{"description": "Damage potency value", "specialType": "number"}"#);
        let meta = field_meta("Potency", &node);
        assert_eq!(meta.description.as_deref(), Some("Damage potency value"));
        assert_eq!(meta.ui_hint, None);
    }

    #[test]
    fn explicit_base_wins_over_side_channel() {
        let b = SchemaBuilder::new();
        let node = b
            .str()
            .labeled("Display Name")
            .hinted(UiHint::Formula)
            .described(r#"{"specialType": "hidden"}"#);
        let meta = field_meta("Name", &node);
        assert_eq!(meta.label, "Display Name");
        assert_eq!(meta.ui_hint, Some(UiHint::Formula));
    }
}
