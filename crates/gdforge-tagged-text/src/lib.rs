//! gdforge-tagged-text — the textual edit surface notation.
//!
//! Records render as indented plain text: `key: value` scalars, `- ` array
//! items, and a `!` tag sigil for discriminated objects — an object carrying
//! a string `type` field is written as `!Type` with its remaining fields
//! indented beneath, and the decoder reinstates the field. Two spaces per
//! nesting level.
//!
//! The round-trip law is `decode(encode(x)).value == x` for every value
//! reachable from the supported schemas; `encode(decode(t))` may normalize
//! whitespace and quoting.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod scalar;

pub use decoder::{decode, Decoded};
pub use encoder::encode;
pub use error::{DecodeError, DecodeWarning};
