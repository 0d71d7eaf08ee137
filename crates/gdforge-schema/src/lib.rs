//! gdforge-schema — schema AST and descriptor resolution.
//!
//! Records are instances of declarative schemas: ordered objects over
//! primitives, arrays, optional wrappers, tagged unions, and named
//! self-references. This crate owns the schema node AST, the fluent
//! builder, the registry behind named references, the resolver that
//! canonicalizes a node for editing, the field-metadata side channel, and
//! the zero-value synthesis used when new data is created.

pub mod builder;
pub mod columns;
pub mod defaults;
pub mod meta;
pub mod registry;
pub mod resolve;
pub mod schema;

pub use builder::SchemaBuilder;
pub use columns::{visible_columns, Column};
pub use defaults::{variant_default, zero_value};
pub use meta::{field_meta, is_hidden, FieldMeta, UiHint};
pub use registry::SchemaRegistry;
pub use resolve::{resolve, Resolved, SchemaError};
pub use schema::{
    ArrSchema, BoolSchema, EnumSchema, FieldSchema, LitSchema, NumSchema, ObjSchema, OptSchema,
    RefSchema, Schema, SchemaBase, StrSchema, UnionSchema,
};
