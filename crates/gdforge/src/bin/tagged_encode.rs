//! `tagged-encode` — convert a JSON record to tagged text notation.
//!
//! Usage:
//!   tagged-encode < record.json
//!
//! The record is read from stdin as JSON; the tagged text is written to
//! stdout.

use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let value: serde_json::Value = match serde_json::from_str(buf.trim()) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("invalid JSON: {e}");
            std::process::exit(1);
        }
    };

    let text = gdforge_tagged_text::encode(&value);
    io::stdout().write_all(text.as_bytes()).unwrap();
}
