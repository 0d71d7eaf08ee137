use serde_json::{Map, Value};

use crate::scalar::{is_bare_word, is_inline, render_scalar};

const INDENT: &str = "  ";

fn indent_of(level: usize) -> String {
    INDENT.repeat(level)
}

/// The tag of a discriminated object: a string `type` field whose value is
/// a bare word.
fn tag_of(map: &Map<String, Value>) -> Option<&str> {
    match map.get("type") {
        Some(Value::String(tag)) if is_bare_word(tag) => Some(tag),
        _ => None,
    }
}

/// Encode a record into the tagged text notation.
///
/// The root is expected to be an object; a scalar root renders as its
/// inline form. An object carrying a discriminator-like `type` field is
/// written as a `!Type` tag with the remaining fields one level beneath.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    match value {
        // an empty record encodes as empty text
        Value::Object(map) => {
            if let Some(tag) = tag_of(map) {
                out.push_str(&format!("!{tag}\n"));
                write_object_body(&mut out, map, 1, true);
            } else {
                write_object_body(&mut out, map, 0, false);
            }
        }
        other => {
            out.push_str(&render_scalar(other));
            out.push('\n');
        }
    }
    out
}

/// Write the entries of `map` at `level`, skipping the `type` field when it
/// has already been emitted as a tag.
fn write_object_body(out: &mut String, map: &Map<String, Value>, level: usize, skip_type: bool) {
    let ind = indent_of(level);
    for (key, value) in map {
        if skip_type && key == "type" {
            continue;
        }
        if is_inline(value) {
            out.push_str(&format!("{ind}{key}: {}\n", render_scalar(value)));
            continue;
        }
        match value {
            Value::Object(obj) => {
                out.push_str(&format!("{ind}{key}:\n"));
                write_object_value(out, obj, level + 1);
            }
            Value::Array(arr) => {
                out.push_str(&format!("{ind}{key}:\n"));
                write_array_items(out, arr, level + 1);
            }
            other => {
                out.push_str(&format!("{ind}{key}: {}\n", render_scalar(other)));
            }
        }
    }
}

/// Write a non-empty object as a container value at `level`: a tag line plus
/// body for discriminated objects, a plain field list otherwise.
fn write_object_value(out: &mut String, obj: &Map<String, Value>, level: usize) {
    if let Some(tag) = tag_of(obj) {
        out.push_str(&format!("{}!{tag}\n", indent_of(level)));
        write_object_body(out, obj, level + 1, true);
    } else {
        write_object_body(out, obj, level, false);
    }
}

/// Write array items at `level`. Tagged items put the tag inline after the
/// dash; untagged object items inline their first field after the dash with
/// continuation lines aligned one level deeper.
fn write_array_items(out: &mut String, arr: &[Value], level: usize) {
    let ind = indent_of(level);
    for item in arr {
        if is_inline(item) {
            out.push_str(&format!("{ind}- {}\n", render_scalar(item)));
            continue;
        }
        match item {
            Value::Object(obj) => {
                if let Some(tag) = tag_of(obj) {
                    out.push_str(&format!("{ind}- !{tag}\n"));
                    write_object_body(out, obj, level + 1, true);
                } else {
                    // render the body one level deeper, then splice the first
                    // line onto the dash (the two prefixes are equal width)
                    let mut body = String::new();
                    write_object_body(&mut body, obj, level + 1, false);
                    let mut lines = body.lines();
                    if let Some(first) = lines.next() {
                        let inner = indent_of(level + 1);
                        out.push_str(&format!("{ind}- {}\n", &first[inner.len()..]));
                        for line in lines {
                            out.push_str(line);
                            out.push('\n');
                        }
                    }
                }
            }
            Value::Array(items) => {
                out.push_str(&format!("{ind}-\n"));
                write_array_items(out, items, level + 1);
            }
            other => {
                out.push_str(&format!("{ind}- {}\n", render_scalar(other)));
            }
        }
    }
}
