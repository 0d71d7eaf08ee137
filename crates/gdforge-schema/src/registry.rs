use std::collections::HashMap;

use crate::schema::Schema;

/// Named schema registry.
///
/// Self-referential and shared types are registered under a name and
/// referenced with [`Schema::Ref`] — an explicit indirection instead of a
/// cyclic object graph. Resolution happens on demand, one step at a time.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: HashMap<String, Schema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `schema` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) {
        self.types.insert(name.into(), schema);
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }
}
