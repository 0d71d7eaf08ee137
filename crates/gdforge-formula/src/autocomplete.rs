use regex::Regex;

use crate::functions::BUILTIN_FUNCTIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Attribute,
    Function,
}

/// One autocomplete entry for the partial word at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub kind: SuggestionKind,
    pub description: String,
    pub syntax: Option<String>,
}

fn partial_word(before_cursor: &str) -> Option<&str> {
    // the identifier ending exactly at the cursor
    let re = Regex::new(r"[A-Za-z_][A-Za-z0-9_]*$").ok()?;
    let matched = re.find(before_cursor)?;
    Some(matched.as_str())
}

fn clamp_to_boundary(formula: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(formula.len());
    while cursor > 0 && !formula.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

/// Suggestions for the partial identifier immediately before `cursor`
/// (a byte offset into `formula`).
///
/// Matches are case-insensitive prefix matches, attributes ranked before
/// functions. A single match that already equals the typed word is
/// suppressed. No partial word means no suggestions.
pub fn suggest(formula: &str, cursor: usize, attributes: &[String]) -> Vec<Suggestion> {
    let cursor = clamp_to_boundary(formula, cursor);
    let partial = match partial_word(&formula[..cursor]) {
        Some(word) if !word.is_empty() => word,
        _ => return Vec::new(),
    };
    let needle = partial.to_lowercase();

    let mut suggestions: Vec<Suggestion> = Vec::new();
    for attr in attributes {
        if attr.to_lowercase().starts_with(&needle) {
            suggestions.push(Suggestion {
                value: attr.clone(),
                kind: SuggestionKind::Attribute,
                description: format!("Reference to {attr} attribute"),
                syntax: None,
            });
        }
    }
    for func in BUILTIN_FUNCTIONS {
        if func.name.to_lowercase().starts_with(&needle) {
            suggestions.push(Suggestion {
                value: func.name.to_string(),
                kind: SuggestionKind::Function,
                description: func.description.to_string(),
                syntax: Some(func.syntax.to_string()),
            });
        }
    }

    if suggestions.len() == 1 && suggestions[0].value.to_lowercase() == needle {
        return Vec::new();
    }
    suggestions
}

/// Apply `suggestion` at `cursor`: the partial word before the cursor is
/// replaced by the suggestion's value; functions additionally insert an
/// empty call `()`. Returns the new formula and the new cursor position
/// (inside the parentheses for functions).
pub fn apply_suggestion(formula: &str, cursor: usize, suggestion: &Suggestion) -> (String, usize) {
    let cursor = clamp_to_boundary(formula, cursor);
    let before = &formula[..cursor];
    let after = &formula[cursor..];

    let start = match partial_word(before) {
        Some(word) => cursor - word.len(),
        None => cursor,
    };

    let mut out = String::with_capacity(formula.len() + suggestion.value.len() + 2);
    out.push_str(&formula[..start]);
    out.push_str(&suggestion.value);
    let mut new_cursor = start + suggestion.value.len();
    if suggestion.kind == SuggestionKind::Function {
        out.push_str("()");
        new_cursor += 1;
    }
    out.push_str(after);
    (out, new_cursor)
}
