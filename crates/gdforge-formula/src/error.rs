use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("unmatched closing parenthesis at offset {0}")]
    UnmatchedClosingParen(usize),

    #[error("unmatched opening parenthesis")]
    UnmatchedOpeningParen,

    #[error("invalid character `{ch}` at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    #[error("unknown function(s): {}", .0.join(", "))]
    UnknownFunctions(Vec<String>),

    #[error("unknown variable(s): {}", .0.join(", "))]
    UnknownVariables(Vec<String>),
}
