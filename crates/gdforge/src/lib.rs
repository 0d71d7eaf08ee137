//! gdforge — a schema-driven editing engine for game-design records.
//!
//! Records (actors, effects, attributes) are instances of declarative
//! schemas holding deeply nested, polymorphic data: time-triggered action
//! lists, tagged callback variants, self-referential attribute graphs. The
//! engine derives addressable, expandable edit rows from a schema and a
//! data instance, keeps a structured view and a tagged text view losslessly
//! synchronized, supports bounded undo, and statically validates embedded
//! formula fields.
//!
//! The workspace splits by concern:
//!
//! - [`gdforge_schema`] — schema AST, resolver, metadata, registry
//! - [`gdforge_path`] — dotted/bracketed addressing, reads and writes
//! - [`gdforge_rows`] — the structured edit view and its mutations
//! - [`gdforge_tagged_text`] — the `!Tag` plain-text notation
//! - [`gdforge_formula`] — formula validation and autocomplete
//! - [`gdforge_session`] — the editing lifecycle and store dispatch

pub use gdforge_formula as formula;
pub use gdforge_path as path;
pub use gdforge_rows as rows;
pub use gdforge_schema as schema;
pub use gdforge_session as session;
pub use gdforge_tagged_text as tagged_text;
pub use gdforge_util as util;

// The types most hosts touch, at the crate root.
pub use gdforge_formula::{suggest, validate, FormulaError, Suggestion};
pub use gdforge_rows::{build_rows, EditorKind, ExpandedPaths, Row, RowDetail, RowKind};
pub use gdforge_schema::{Schema, SchemaBuilder, SchemaRegistry, UiHint};
pub use gdforge_session::{
    CollectionCatalog, CollectionConfig, EditSession, MemoryStore, RecordStore, SessionState,
    StoreError, View,
};
pub use gdforge_tagged_text::{decode, encode};
