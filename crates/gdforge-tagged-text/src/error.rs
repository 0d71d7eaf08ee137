use thiserror::Error;

/// A non-fatal problem found while decoding. The decoder keeps going and
/// reports what it skipped; warnings never corrupt already-decoded data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// `!Tag: value` — a tag with an inline scalar. Tags always introduce a
    /// multi-line body; the line is skipped rather than guessed at.
    #[error("line {line}: inline value after tag is not supported")]
    InlineTagValue { line: usize },

    /// A `!Tag` line with nothing to attach to.
    #[error("line {line}: tag without a field or array item to attach to")]
    StrayTag { line: usize },

    /// A `- ` item outside any array context.
    #[error("line {line}: array item outside an array")]
    StrayItem { line: usize },

    /// A line that is neither `key: value`, `- item`, nor `!Tag`.
    #[error("line {line}: unrecognized line")]
    UnrecognizedLine { line: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Nothing in the input could be decoded. The caller should keep its
    /// last known-good value.
    #[error("no decodable structure found")]
    NoStructure { warnings: Vec<DecodeWarning> },
}
