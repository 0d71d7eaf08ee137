use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_identity_field() -> String {
    "Name".to_string()
}

fn default_id_field() -> String {
    "id".to_string()
}

/// Per-collection configuration: what the collection is called and which
/// fields identify its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Collection key, e.g. `effects`.
    pub name: String,
    /// Display title, e.g. `Effects`.
    pub title: String,
    /// Name-like identity field checked first.
    #[serde(default = "default_identity_field")]
    pub identity_field: String,
    /// Numeric id field used when the identity field is absent.
    #[serde(default = "default_id_field")]
    pub id_field: String,
}

impl CollectionConfig {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            identity_field: default_identity_field(),
            id_field: default_id_field(),
        }
    }
}

/// The set of collections a host edits, in declaration order.
///
/// Deserializes from a `[[collections]]` TOML table array (or the JSON
/// equivalent), so hosts can describe their collections in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCatalog {
    #[serde(default)]
    collections: Vec<CollectionConfig>,
}

impl CollectionCatalog {
    pub fn new(collections: Vec<CollectionConfig>) -> Self {
        Self { collections }
    }

    pub fn get(&self, name: &str) -> Option<&CollectionConfig> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollectionConfig> {
        self.collections.iter()
    }

    /// Collection names keyed to their configs, in declaration order.
    pub fn by_name(&self) -> IndexMap<String, CollectionConfig> {
        self.collections
            .iter()
            .map(|c| (c.name.clone(), c.clone()))
            .collect()
    }
}

/// The identity a record is stored and referenced under: the configured
/// name-like field when present and non-empty, otherwise the numeric id
/// field rendered as a string.
pub fn resolve_identity(record: &Value, config: &CollectionConfig) -> Option<String> {
    if let Some(name) = record.get(config.identity_field.as_str()).and_then(Value::as_str) {
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }
    record
        .get(config.id_field.as_str())
        .and_then(Value::as_i64)
        .map(|id| id.to_string())
}
