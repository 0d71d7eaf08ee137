use thiserror::Error;

use crate::registry::SchemaRegistry;
use crate::schema::Schema;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown schema reference `{0}`")]
    UnknownRef(String),

    #[error("reference cycle through `{0}`")]
    RefCycle(String),
}

/// A schema node canonicalized for editing.
///
/// Optional wrappers are unwrapped (the inner kind chooses the editor) with
/// `optional` recording that absence is legal — an absent optional field
/// round-trips as a missing key, never a null sentinel.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub node: &'a Schema,
    pub optional: bool,
}

/// Canonicalize `node`: strip `Opt` wrappers and follow `Ref` indirections
/// through the registry.
///
/// Resolution is lazy and shallow — it stops at the first concrete node, so
/// self-referential types terminate here and recursion is bounded where the
/// node is actually visited (the row builder's depth guard). Degenerate
/// ref-to-ref cycles are detected and reported.
pub fn resolve<'a>(
    node: &'a Schema,
    registry: &'a SchemaRegistry,
) -> Result<Resolved<'a>, SchemaError> {
    let mut current = node;
    let mut optional = false;
    let mut seen: Vec<&str> = Vec::new();

    loop {
        match current {
            Schema::Opt(opt) => {
                optional = true;
                current = &opt.inner;
            }
            Schema::Ref(reference) => {
                if seen.iter().any(|name| *name == reference.target) {
                    return Err(SchemaError::RefCycle(reference.target.clone()));
                }
                seen.push(&reference.target);
                current = registry
                    .get(&reference.target)
                    .ok_or_else(|| SchemaError::UnknownRef(reference.target.clone()))?;
            }
            _ => return Ok(Resolved { node: current, optional }),
        }
    }
}
