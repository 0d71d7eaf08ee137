use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use crate::config::{resolve_identity, CollectionConfig};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two records must never share an identity within one collection;
    /// rejecting a duplicate `add` is the store's contract.
    #[error("a record with identity `{0}` already exists")]
    IdentityConflict(String),

    #[error("no record with identity `{0}`")]
    NotFound(String),

    #[error("record has no usable identity")]
    MissingIdentity,
}

/// The external persistence collaborator, one per collection. The engine
/// dispatches to it and never awaits results — reporting asynchronous
/// failures back to the user is the host's job.
pub trait RecordStore {
    fn add(&mut self, record: Value) -> Result<(), StoreError>;
    fn update(&mut self, identity: &str, record: Value) -> Result<(), StoreError>;
    fn delete(&mut self, identity: &str) -> Result<(), StoreError>;
    fn get_by_id(&self, identity: &str) -> Option<Value>;
    /// Known identities in insertion order.
    fn list_identities(&self) -> Vec<String>;
}

/// In-memory store keyed by record identity, in insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    config: CollectionConfig,
    records: IndexMap<String, Value>,
}

impl MemoryStore {
    pub fn new(config: CollectionConfig) -> Self {
        Self { config, records: IndexMap::new() }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Value> {
        self.records.values()
    }

    fn identity_of(&self, record: &Value) -> Result<String, StoreError> {
        resolve_identity(record, &self.config).ok_or(StoreError::MissingIdentity)
    }
}

impl RecordStore for MemoryStore {
    fn add(&mut self, record: Value) -> Result<(), StoreError> {
        let identity = self.identity_of(&record)?;
        if self.records.contains_key(&identity) {
            return Err(StoreError::IdentityConflict(identity));
        }
        self.records.insert(identity, record);
        Ok(())
    }

    fn update(&mut self, identity: &str, record: Value) -> Result<(), StoreError> {
        if !self.records.contains_key(identity) {
            return Err(StoreError::NotFound(identity.to_string()));
        }
        let new_identity = self.identity_of(&record)?;
        if new_identity == identity {
            self.records.insert(new_identity, record);
        } else {
            // explicit rename: re-key the record
            if self.records.contains_key(&new_identity) {
                return Err(StoreError::IdentityConflict(new_identity));
            }
            self.records.shift_remove(identity);
            self.records.insert(new_identity, record);
        }
        Ok(())
    }

    fn delete(&mut self, identity: &str) -> Result<(), StoreError> {
        self.records
            .shift_remove(identity)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(identity.to_string()))
    }

    fn get_by_id(&self, identity: &str) -> Option<Value> {
        self.records.get(identity).cloned()
    }

    fn list_identities(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }
}
