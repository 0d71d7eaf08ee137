//! `tagged-decode` — convert tagged text notation to a JSON record.
//!
//! Usage:
//!   tagged-decode < record.txt
//!
//! The tagged text is read from stdin; the record is written to stdout as
//! pretty-printed JSON. Decode warnings go to stderr.

use std::io::{self, Read, Write};

fn main() {
    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let decoded = match gdforge_tagged_text::decode(&buf) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for warning in &decoded.warnings {
        eprintln!("warning: {warning}");
    }

    let json = match serde_json::to_string_pretty(&decoded.value) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    io::stdout().write_all(json.as_bytes()).unwrap();
    io::stdout().write_all(b"\n").unwrap();
}
