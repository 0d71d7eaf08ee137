use crate::error::FormulaError;
use crate::functions::is_builtin;

// Characters allowed outside string literals, besides alphanumerics and
// whitespace. `$` is the attribute-reference sigil.
const PUNCTUATION: &str = "+-*/()=,._$\"";

/// Statically validate a formula against the declared attribute names.
///
/// Checks run in order: parenthesis balance (string-literal-aware), the
/// permitted character set, unknown functions (uppercase-leading identifiers
/// immediately followed by `(` must be built-ins), and unknown variables
/// (bare identifiers, `$` sigil stripped, must name a declared attribute or
/// a built-in). An empty formula is valid.
pub fn validate(formula: &str, known_identifiers: &[String]) -> Result<(), FormulaError> {
    check_parens(formula)?;
    check_charset(formula)?;
    check_identifiers(formula, known_identifiers)
}

fn check_parens(formula: &str) -> Result<(), FormulaError> {
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut last: Option<char> = None;

    for (offset, ch) in formula.char_indices() {
        if ch == '"' && last != Some('\\') {
            in_string = !in_string;
        }
        if !in_string {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(FormulaError::UnmatchedClosingParen(offset));
                    }
                }
                _ => {}
            }
        }
        last = Some(ch);
    }

    if depth > 0 {
        return Err(FormulaError::UnmatchedOpeningParen);
    }
    Ok(())
}

fn check_charset(formula: &str) -> Result<(), FormulaError> {
    let mut in_string = false;
    let mut last: Option<char> = None;

    for (offset, ch) in formula.char_indices() {
        if ch == '"' && last != Some('\\') {
            in_string = !in_string;
            last = Some(ch);
            continue;
        }
        if !in_string && !ch.is_ascii_alphanumeric() && !ch.is_whitespace() && !PUNCTUATION.contains(ch)
        {
            return Err(FormulaError::InvalidCharacter { ch, offset });
        }
        last = Some(ch);
    }
    Ok(())
}

/// An identifier token and whether a `(` follows it.
struct Token {
    text: String,
    is_call: bool,
}

fn scan_identifiers(formula: &str) -> Vec<Token> {
    let chars: Vec<char> = formula.chars().collect();
    let mut tokens = Vec::new();
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch == '"' && (i == 0 || chars[i - 1] != '\\') {
            in_string = !in_string;
            i += 1;
            continue;
        }
        if in_string {
            i += 1;
            continue;
        }
        if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let mut j = i;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            let is_call = chars.get(j) == Some(&'(');
            tokens.push(Token { text, is_call });
        } else if ch.is_ascii_digit() {
            // numeric literal, including a fractional part
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
        } else {
            i += 1;
        }
    }
    tokens
}

fn check_identifiers(formula: &str, known: &[String]) -> Result<(), FormulaError> {
    let tokens = scan_identifiers(formula);

    let mut unknown_functions: Vec<String> = Vec::new();
    for token in tokens.iter().filter(|t| t.is_call) {
        let leading_upper = token.text.chars().next().is_some_and(|c| c.is_ascii_uppercase());
        if leading_upper && !is_builtin(&token.text) && !unknown_functions.contains(&token.text) {
            unknown_functions.push(token.text.clone());
        }
    }
    if !unknown_functions.is_empty() {
        return Err(FormulaError::UnknownFunctions(unknown_functions));
    }

    let mut unknown_variables: Vec<String> = Vec::new();
    for token in tokens.iter().filter(|t| !t.is_call) {
        let name = token.text.strip_prefix('$').unwrap_or(&token.text);
        let declared = known.iter().any(|k| k == name) || is_builtin(name);
        if !declared && !unknown_variables.contains(&token.text) {
            unknown_variables.push(token.text.clone());
        }
    }
    if !unknown_variables.is_empty() {
        return Err(FormulaError::UnknownVariables(unknown_variables));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_formula_is_valid() {
        assert_eq!(validate("", &[]), Ok(()));
    }

    #[test]
    fn clamp_over_attributes_validates() {
        let attrs = known(&["Strength", "Dexterity"]);
        assert_eq!(validate("CLAMP($Strength + $Dexterity, 50, 200)", &attrs), Ok(()));
    }

    #[test]
    fn plain_arithmetic_validates() {
        assert_eq!(validate("10 + 2 * 3.5", &[]), Ok(()));
    }

    #[test]
    fn unknown_function_fails() {
        assert_eq!(
            validate("FOO(1)", &[]),
            Err(FormulaError::UnknownFunctions(vec!["FOO".to_string()]))
        );
    }

    #[test]
    fn unmatched_opening_paren_fails_after_scan() {
        assert_eq!(validate("(1 + 2", &[]), Err(FormulaError::UnmatchedOpeningParen));
    }

    #[test]
    fn unmatched_closing_paren_fails_at_offset() {
        assert_eq!(
            validate("1 + 2)", &[]),
            Err(FormulaError::UnmatchedClosingParen(5))
        );
    }

    #[test]
    fn parens_inside_strings_are_ignored() {
        assert_eq!(validate("\"(((\"", &[]), Ok(()));
    }

    #[test]
    fn invalid_character_fails() {
        assert_eq!(
            validate("1 # 2", &[]),
            Err(FormulaError::InvalidCharacter { ch: '#', offset: 2 })
        );
    }

    #[test]
    fn unknown_variable_fails() {
        let attrs = known(&["Strength"]);
        assert_eq!(
            validate("$Strength + $Luck", &attrs),
            Err(FormulaError::UnknownVariables(vec!["$Luck".to_string()]))
        );
    }

    #[test]
    fn sigil_free_attribute_reference_is_accepted() {
        let attrs = known(&["Level"]);
        assert_eq!(validate("10 + Level * 2", &attrs), Ok(()));
    }

    #[test]
    fn builtin_name_without_call_is_not_a_variable_error() {
        assert_eq!(validate("MAX", &[]), Ok(()));
    }

    #[test]
    fn function_errors_reported_before_variable_errors() {
        assert_eq!(
            validate("FOO($Missing)", &[]),
            Err(FormulaError::UnknownFunctions(vec!["FOO".to_string()]))
        );
    }

    #[test]
    fn lowercase_call_is_not_function_checked() {
        // Only uppercase-leading identifiers are held to the built-in set.
        let attrs = known(&["lerp"]);
        assert_eq!(validate("lerp(1, 2)", &attrs), Ok(()));
    }
}
