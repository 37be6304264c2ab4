//! Error type shared by the dictionary, registry and engine modules.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Only the configuration variants can come out of a translation call. Missing
/// syllables while encoding and unknown substrings while decoding are absorbed
/// into best-effort output instead.
#[derive(Debug, Error)]
pub enum GibberifyError {
    /// No dictionary is registered for the requested language pair.
    #[error("no dictionary for language pair {lang_in}-{lang_out}")]
    MissingDictionary { lang_in: String, lang_out: String },

    /// The dictionary has no entries, so there is nothing to substitute or fall back on.
    #[error("dictionary {code} is empty")]
    EmptyDictionary { code: String },

    /// A dictionary file name does not follow the `<in>-<out>.<ext>` convention.
    #[error("invalid dictionary file name: {}", .0.display())]
    InvalidDictionaryName(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl GibberifyError {
    /// True for errors that stem from selecting or supplying dictionaries,
    /// as opposed to I/O or decoding failures.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GibberifyError::MissingDictionary { .. } | GibberifyError::EmptyDictionary { .. }
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GibberifyError>;
