//! Lossless partition of text into word and separator tokens.
//!
//! Words are maximal runs of Unicode word characters (`\w`). Everything in
//! between (whitespace, punctuation, symbols) is a separator. Concatenating the
//! tokens in order reproduces the input exactly.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// A slice of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Separator(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Separator(s) => s,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

/// Split `text` into alternating word and separator tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in WORD_RE.find_iter(text) {
        if m.start() > last {
            tokens.push(Token::Separator(&text[last..m.start()]));
        }
        tokens.push(Token::Word(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        tokens.push(Token::Separator(&text[last..]));
    }
    tokens
}
