use std::fmt;

use thiserror::Error;

/// One step of a path: an object member or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    Key(String),
    Index(usize),
}

/// A parsed path: an ordered sequence of steps from the record root.
///
/// The empty path addresses the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    pub steps: Vec<Step>,
}

impl Path {
    pub fn root() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the path with its last step removed, plus that step.
    pub fn split_last(&self) -> Option<(Path, &Step)> {
        let (last, parent) = self.steps.split_last()?;
        Some((Path { steps: parent.to_vec() }, last))
    }

    pub fn child(mut self, key: impl Into<String>) -> Self {
        self.steps.push(Step::Key(key.into()));
        self
    }

    pub fn item(mut self, index: usize) -> Self {
        self.steps.push(Step::Index(index));
        self
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::parse::format_path(&self.steps))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty member name at offset {0}")]
    EmptyKey(usize),

    #[error("unterminated bracket at offset {0}")]
    UnterminatedBracket(usize),

    #[error("invalid array index at offset {0}")]
    InvalidIndex(usize),

    #[error("unexpected character `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("path target not found")]
    NotFound,

    #[error("path step does not address a container")]
    NotAContainer,

    #[error("array index out of bounds")]
    OutOfBounds,
}
