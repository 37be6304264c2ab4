//! Interactive session state.
//!
//! The REPL loop in the binary feeds each input line to `Session::handle_line`
//! and prints the reply. Lines starting with `:` are commands:
//!
//! - `:lang <in> <out>` switch the language pair
//! - `:seed <n>` / `:seed off` set or clear the per-call seed
//! - `:pairs` list available pairs
//! - `:quit` end the session
//!
//! Anything else is translated with the current pair. Changing a setting never
//! re-runs a translation on its own.

use gibberify_core::{DictionarySet, Engine};

use crate::languages;

/// What the loop should do with a handled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text to stdout.
    Output(String),
    /// Print this message to stderr and keep going.
    Notice(String),
    /// Nothing to print.
    Empty,
    /// Leave the loop.
    Quit,
}

/// Mutable settings of one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub lang_in: String,
    pub lang_out: String,
    pub seed: Option<u64>,
}

impl Session {
    pub fn new<S: Into<String>>(lang_in: S, lang_out: S, seed: Option<u64>) -> Self {
        Self {
            lang_in: lang_in.into(),
            lang_out: lang_out.into(),
            seed,
        }
    }

    /// Prompt label such as `en-orc> `.
    pub fn prompt(&self) -> String {
        format!("{}-{}> ", self.lang_in, self.lang_out)
    }

    pub fn handle_line(&mut self, engine: &Engine, dicts: &DictionarySet, line: &str) -> Reply {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            return Reply::Empty;
        }
        match line.strip_prefix(':') {
            Some(command) => self.handle_command(dicts, command),
            None => match engine.translate_pair(dicts, &self.lang_in, &self.lang_out, line, self.seed) {
                Ok(text) => Reply::Output(text),
                Err(e) => Reply::Notice(format!("error: {}", e)),
            },
        }
    }

    fn handle_command(&mut self, dicts: &DictionarySet, command: &str) -> Reply {
        let mut words = command.split_whitespace();
        match (words.next(), words.next(), words.next(), words.next()) {
            (Some("quit") | Some("q"), None, _, _) => Reply::Quit,
            (Some("lang"), Some(lang_in), Some(lang_out), None) => {
                if !dicts.contains(lang_in, lang_out) {
                    return Reply::Notice(format!("no dictionary for {}-{}", lang_in, lang_out));
                }
                self.lang_in = lang_in.to_string();
                self.lang_out = lang_out.to_string();
                Reply::Notice(format!(
                    "translating {} -> {}",
                    languages::display_name(lang_in),
                    languages::display_name(lang_out)
                ))
            }
            (Some("seed"), Some("off"), None, _) => {
                self.seed = None;
                Reply::Notice("seed cleared".to_string())
            }
            (Some("seed"), Some(value), None, _) => match value.parse::<u64>() {
                Ok(seed) => {
                    self.seed = Some(seed);
                    Reply::Notice(format!("seed set to {}", seed))
                }
                Err(_) => Reply::Notice(format!("invalid seed '{}'", value)),
            },
            (Some("pairs"), None, _, _) => Reply::Output(dicts.codes().join("\n")),
            _ => Reply::Notice(format!(
                "unknown command ':{}' (try :lang, :seed, :pairs, :quit)",
                command.trim()
            )),
        }
    }
}
