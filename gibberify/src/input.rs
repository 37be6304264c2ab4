//! Message arguments for one-shot translation.
//!
//! Each `--message` argument is one of:
//! - `-` : the whole of standard input (read once; later `-` yield nothing)
//! - a path to an existing file : the file's contents
//! - anything else : the literal text
//!
//! The parts are joined with single spaces.

use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Resolve message arguments into the text to translate.
pub fn read_message<R: Read>(args: &[String], mut stdin: R) -> anyhow::Result<String> {
    let mut parts = Vec::with_capacity(args.len());
    let mut stdin_used = false;

    for arg in args {
        if arg == "-" {
            if stdin_used {
                continue;
            }
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read message from stdin")?;
            stdin_used = true;
            parts.push(trim_newline(buf));
        } else if Path::new(arg).is_file() {
            let content = std::fs::read_to_string(arg)
                .with_context(|| format!("failed to read message file {}", arg))?;
            parts.push(trim_newline(content));
        } else {
            parts.push(arg.clone());
        }
    }

    Ok(parts.join(" "))
}

fn trim_newline(mut s: String) -> String {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
    s
}
