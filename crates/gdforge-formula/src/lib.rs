//! gdforge-formula — static validation and autocomplete for formula fields.
//!
//! Formula strings embed small arithmetic expressions in string fields:
//! `CLAMP($Strength + $Dexterity, 50, 200)`. Attributes are referenced by
//! name with a `$` sigil; a fixed set of built-in functions is available.
//! This crate validates syntax and identifiers statically (no evaluation)
//! and drives the autocomplete surface.

pub mod autocomplete;
pub mod error;
pub mod format;
pub mod functions;
pub mod validate;

pub use autocomplete::{apply_suggestion, suggest, Suggestion, SuggestionKind};
pub use error::FormulaError;
pub use format::format_formula;
pub use functions::{builtin, is_builtin, FunctionDef, BUILTIN_FUNCTIONS};
pub use validate::validate;
