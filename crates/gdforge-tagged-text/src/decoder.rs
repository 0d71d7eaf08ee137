use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{DecodeError, DecodeWarning};
use crate::scalar::parse_scalar;

/// A decoded value plus the non-fatal problems found along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub value: Value,
    pub warnings: Vec<DecodeWarning>,
}

/// What a stack frame is building.
enum Container {
    /// Opened by `key:` or a bare `-` and materialized by its first child:
    /// a mapping, a sequence, or a tagged object. Left empty, it becomes `{}`.
    Pending,
    Map(Map<String, Value>),
    Seq(Vec<Value>),
}

/// Where a frame's value lands when the frame closes.
enum Slot {
    Root,
    Key(String),
    Item,
}

struct Frame {
    /// Indent column of the line that opened this frame. A new line at an
    /// indent less than or equal to this closes the frame.
    indent: i64,
    container: Container,
    slot: Slot,
}

impl Frame {
    fn into_value(self) -> Value {
        match self.container {
            Container::Pending => Value::Object(Map::new()),
            Container::Map(map) => Value::Object(map),
            Container::Seq(seq) => Value::Array(seq),
        }
    }
}

fn tagged_map(name: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::String(name.to_string()));
    map
}

struct Parser {
    stack: Vec<Frame>,
    warnings: Vec<DecodeWarning>,
}

/// Decode tagged text into a record value.
///
/// The parser is line-oriented and indentation-tracked; it never panics and
/// degrades to a best-effort partial value with warnings. Input from which
/// nothing at all can be decoded is an error so the caller can keep its last
/// known-good value.
pub fn decode(text: &str) -> Result<Decoded, DecodeError> {
    let mut parser = Parser {
        stack: vec![Frame {
            indent: -1,
            container: Container::Map(Map::new()),
            slot: Slot::Root,
        }],
        warnings: Vec::new(),
    };

    let mut saw_content = false;
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        let content = line.trim_start();
        if content.is_empty() {
            continue;
        }
        saw_content = true;
        let indent = (line.len() - content.len()) as i64;
        parser.close_to(indent);
        parser.handle(content, indent, line_no);
    }

    parser.close_to(0);
    let root = match parser.stack.pop() {
        Some(frame) => frame.into_value(),
        None => Value::Object(Map::new()),
    };

    for warning in &parser.warnings {
        warn!(%warning, "tagged text decode degraded");
    }

    let nothing_decoded = root.as_object().map(|m| m.is_empty()).unwrap_or(false);
    if saw_content && nothing_decoded && !parser.warnings.is_empty() {
        return Err(DecodeError::NoStructure { warnings: parser.warnings });
    }

    Ok(Decoded { value: root, warnings: parser.warnings })
}

impl Parser {
    /// Close every frame opened at `indent` or deeper, attaching each value
    /// to its parent.
    fn close_to(&mut self, indent: i64) {
        while self.stack.len() > 1 {
            match self.stack.last() {
                Some(frame) if frame.indent >= indent => {}
                _ => break,
            }
            let Some(frame) = self.stack.pop() else { break };
            let Frame { container, slot, .. } = frame;
            let value = match container {
                Container::Pending => Value::Object(Map::new()),
                Container::Map(map) => Value::Object(map),
                Container::Seq(seq) => Value::Array(seq),
            };
            let Some(parent) = self.stack.last_mut() else { break };
            match (&mut parent.container, slot) {
                (Container::Map(map), Slot::Key(key)) => {
                    map.insert(key, value);
                }
                (Container::Seq(seq), Slot::Item) => seq.push(value),
                _ => {}
            }
        }
    }

    /// Dispatch one line of content. `frame_indent` is the indent column a
    /// frame opened by this content should record — for the inline remainder
    /// of a `- ` item it is the dash column, not the content column.
    fn handle(&mut self, content: &str, frame_indent: i64, line_no: usize) {
        if let Some(rest) = content.strip_prefix('-') {
            if rest.is_empty() || rest.starts_with(' ') {
                self.handle_item(rest.trim_start(), frame_indent, line_no);
                return;
            }
        }
        if let Some(name) = content.strip_prefix('!') {
            self.handle_tag(name, frame_indent, line_no);
            return;
        }
        if let Some((key, value_text)) = content.split_once(':') {
            self.handle_entry(key.trim(), value_text.trim(), frame_indent, line_no);
            return;
        }
        self.warnings.push(DecodeWarning::UnrecognizedLine { line: line_no });
    }

    /// `- rest` — append to the nearest sequence, materializing a pending
    /// container as an array first.
    fn handle_item(&mut self, rest: &str, dash_indent: i64, line_no: usize) {
        let at_root = self.stack.len() == 1;
        let materialize = match self.stack.last().map(|f| &f.container) {
            Some(Container::Seq(_)) => false,
            Some(Container::Pending) => true,
            // `key:` opened a mapping; its first item converts it
            Some(Container::Map(map)) if map.is_empty() && !at_root => true,
            _ => {
                self.warnings.push(DecodeWarning::StrayItem { line: line_no });
                return;
            }
        };
        if materialize {
            if let Some(top) = self.stack.last_mut() {
                top.container = Container::Seq(Vec::new());
            }
        }

        if rest.is_empty() {
            // item whose shape arrives on the following lines
            self.stack.push(Frame {
                indent: dash_indent,
                container: Container::Pending,
                slot: Slot::Item,
            });
            return;
        }

        if let Some(name) = rest.strip_prefix('!') {
            if name.contains(':') {
                self.warnings.push(DecodeWarning::InlineTagValue { line: line_no });
                return;
            }
            self.stack.push(Frame {
                indent: dash_indent,
                container: Container::Map(tagged_map(name.trim())),
                slot: Slot::Item,
            });
            return;
        }

        if rest.starts_with('-') && (rest == "-" || rest[1..].starts_with(' ')) {
            // nested sequence item
            self.stack.push(Frame {
                indent: dash_indent,
                container: Container::Seq(Vec::new()),
                slot: Slot::Item,
            });
            self.handle_item(rest[1..].trim_start(), dash_indent + 2, line_no);
            return;
        }

        if !rest.starts_with('"') {
            if let Some((key, value_text)) = rest.split_once(':') {
                if value_text.is_empty() || value_text.starts_with(' ') {
                    // object item with its first field inline after the dash
                    self.stack.push(Frame {
                        indent: dash_indent,
                        container: Container::Map(Map::new()),
                        slot: Slot::Item,
                    });
                    self.handle_entry(key.trim(), value_text.trim(), dash_indent + 2, line_no);
                    return;
                }
            }
        }

        // plain scalar item
        let value = parse_scalar(rest);
        if let Some(Frame { container: Container::Seq(seq), .. }) = self.stack.last_mut() {
            seq.push(value);
        }
    }

    /// `!Tag` — open a tagged object, reinstating its `type` field.
    fn handle_tag(&mut self, name: &str, frame_indent: i64, line_no: usize) {
        if name.contains(':') {
            self.warnings.push(DecodeWarning::InlineTagValue { line: line_no });
            return;
        }
        let name = name.trim();
        if name.is_empty() {
            self.warnings.push(DecodeWarning::UnrecognizedLine { line: line_no });
            return;
        }

        enum Target {
            MaterializePending,
            AppendToSeq,
            TagRoot,
            Stray,
        }
        let at_root = self.stack.len() == 1;
        let target = match self.stack.last().map(|f| &f.container) {
            Some(Container::Pending) => Target::MaterializePending,
            Some(Container::Seq(_)) => Target::AppendToSeq,
            Some(Container::Map(map)) if at_root && map.is_empty() => Target::TagRoot,
            _ => Target::Stray,
        };

        match target {
            Target::MaterializePending => {
                if let Some(top) = self.stack.last_mut() {
                    top.container = Container::Map(tagged_map(name));
                }
            }
            Target::AppendToSeq => self.stack.push(Frame {
                indent: frame_indent,
                container: Container::Map(tagged_map(name)),
                slot: Slot::Item,
            }),
            Target::TagRoot => {
                if let Some(Frame { container: Container::Map(map), .. }) = self.stack.last_mut() {
                    map.insert("type".to_string(), Value::String(name.to_string()));
                }
            }
            Target::Stray => self.warnings.push(DecodeWarning::StrayTag { line: line_no }),
        }
    }

    /// `key: value` or `key:` — a mapping entry.
    fn handle_entry(&mut self, key: &str, value_text: &str, frame_indent: i64, line_no: usize) {
        let materialize = match self.stack.last().map(|f| &f.container) {
            Some(Container::Pending) => true,
            Some(Container::Map(_)) => false,
            _ => {
                // a field line with no dash inside a sequence
                self.warnings.push(DecodeWarning::UnrecognizedLine { line: line_no });
                return;
            }
        };
        if materialize {
            if let Some(top) = self.stack.last_mut() {
                top.container = Container::Map(Map::new());
            }
        }

        if value_text.is_empty() {
            self.stack.push(Frame {
                indent: frame_indent,
                container: Container::Pending,
                slot: Slot::Key(key.to_string()),
            });
            return;
        }

        let value = parse_scalar(value_text);
        if let Some(Frame { container: Container::Map(map), .. }) = self.stack.last_mut() {
            map.insert(key.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_ok(text: &str) -> Value {
        let decoded = decode(text).expect("decode failed");
        assert!(decoded.warnings.is_empty(), "warnings: {:?}", decoded.warnings);
        decoded.value
    }

    #[test]
    fn scalars() {
        let value = decode_ok("Name: Burning\nPeriod: 0.5\nMaxStacks: 3\nActive: true\n");
        assert_eq!(
            value,
            json!({"Name": "Burning", "Period": 0.5, "MaxStacks": 3, "Active": true})
        );
    }

    #[test]
    fn empty_input_is_empty_record() {
        assert_eq!(decode_ok(""), json!({}));
        assert_eq!(decode_ok("\n\n"), json!({}));
    }

    #[test]
    fn tagged_items_reinstate_type() {
        let text = "OnTick:\n  - !Damage\n    Type: Fire\n    Potency: 25\n  - !Heal\n    Potency: 50\n";
        assert_eq!(
            decode_ok(text),
            json!({"OnTick": [
                {"type": "Damage", "Type": "Fire", "Potency": 25},
                {"type": "Heal", "Potency": 50},
            ]})
        );
    }

    #[test]
    fn untagged_object_items() {
        let text = "Triggers:\n  - Time: 0.25\n    Actions:\n      - !CircleQuery\n        Radius: 0.5\n  - Time: 1.25\n";
        assert_eq!(
            decode_ok(text),
            json!({"Triggers": [
                {"Time": 0.25, "Actions": [{"type": "CircleQuery", "Radius": 0.5}]},
                {"Time": 1.25},
            ]})
        );
    }

    #[test]
    fn nested_tagged_object_under_key() {
        let text = "Root:\n  !Node\n    Name: x\n";
        assert_eq!(decode_ok(text), json!({"Root": {"type": "Node", "Name": "x"}}));
    }

    #[test]
    fn tagged_root() {
        let text = "!Actor\n  Name: Fireball\n";
        assert_eq!(decode_ok(text), json!({"type": "Actor", "Name": "Fireball"}));
    }

    #[test]
    fn pending_key_without_children_is_empty_object() {
        assert_eq!(decode_ok("a: 1\nb:\nc: 3\n"), json!({"a": 1, "b": {}, "c": 3}));
    }

    #[test]
    fn scalar_items() {
        assert_eq!(
            decode_ok("xs:\n  - 1\n  - two\n  - true\n"),
            json!({"xs": [1, "two", true]})
        );
    }

    #[test]
    fn negative_number_items() {
        assert_eq!(decode_ok("xs:\n  - -5\n  - -0.5\n"), json!({"xs": [-5, -0.5]}));
    }

    #[test]
    fn quoted_scalar_item_with_colon_stays_a_scalar() {
        assert_eq!(
            decode_ok("xs:\n  - \"a: b\"\n"),
            json!({"xs": ["a: b"]})
        );
    }

    #[test]
    fn quoted_scalars_preserve_structure_characters() {
        assert_eq!(
            decode_ok("Potency: \"$Strength * 2 + 20\"\n"),
            json!({"Potency": "$Strength * 2 + 20"})
        );
    }

    #[test]
    fn inline_tag_value_is_warned_and_skipped() {
        let decoded = decode("Name: ok\nCallback:\n  !Damage: 25\n").unwrap();
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::InlineTagValue { line: 3 }]
        );
        assert_eq!(decoded.value, json!({"Name": "ok", "Callback": {}}));
    }

    #[test]
    fn inline_tag_value_in_an_array_is_warned_and_skipped() {
        let decoded = decode("xs:\n  - !Damage: 25\n").unwrap();
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::InlineTagValue { line: 2 }]
        );
        assert_eq!(decoded.value, json!({"xs": []}));
    }

    #[test]
    fn garbage_only_input_is_an_error() {
        let err = decode("what even is this\n").unwrap_err();
        assert!(matches!(err, DecodeError::NoStructure { .. }));
    }

    #[test]
    fn partial_damage_does_not_lose_good_fields() {
        let decoded = decode("Name: ok\nwhat even is this\nPeriod: 2\n").unwrap();
        assert_eq!(decoded.value, json!({"Name": "ok", "Period": 2}));
        assert_eq!(decoded.warnings.len(), 1);
    }

    #[test]
    fn deep_indentation_pops_back_correctly() {
        let text = "a:\n  b:\n    c: 1\nd: 2\n";
        assert_eq!(decode_ok(text), json!({"a": {"b": {"c": 1}}, "d": 2}));
    }
}
