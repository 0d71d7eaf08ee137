//! gdforge-rows — the structured edit view.
//!
//! Pairs a resolved schema with live data and derives an ordered list of
//! addressable, expandable row descriptors: summary rows for nested objects
//! and arrays, editor rows for leaves, one row per array element with
//! variant switching for tagged unions. Building is pure — every mutation
//! helper takes the current draft by reference and returns a new draft.

pub mod build;
pub mod expand;
pub mod mutate;
pub mod row;
pub mod walk;

pub use build::{build_rows, MAX_DEPTH};
pub use expand::ExpandedPaths;
pub use mutate::{
    append_item, clear_array, delete_item, move_array_item, set_value, switch_variant, MutateError,
};
pub use row::{EditorKind, Row, RowDetail, RowKind, VariantChoice};
pub use walk::schema_at;
