//! gibberify-core
//!
//! Syllable dictionaries and the translation engine shared by the gibberify
//! front-ends.
//!
//! Text is turned into a constructed "gibberish" language by splitting words
//! into syllables and substituting each one through a dictionary, and turned
//! back (approximately) by greedily replacing the longest known gibberish
//! syllables with their sources.
//!
//! Public API:
//! - `ForwardDictionary` / `ReverseDictionary` / `SyllableDictionary` - the
//!   mapping for one language pair, in encode or decode orientation
//! - `DictionarySet` - dictionaries keyed by language pair
//! - `Engine` / `translate` - the encode/decode entry points
//! - `Syllabizer` - pluggable syllable segmentation rule
//! - `Config` - behaviour switches, loadable from TOML
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{GibberifyError, Result};

pub mod syllable;
pub use syllable::{Syllabizer, VowelGroupSyllabizer};

pub mod token;
pub use token::{tokenize, Token};

pub mod dictionary;
pub use dictionary::{
    CandidateTable, ForwardDictionary, Orientation, ReverseDictionary, SyllableDictionary,
};

pub mod encode;
pub use encode::gibberify;

pub mod decode;
pub use decode::{degibberify, MaskedSpans};

pub mod registry;
pub use registry::{pair_code, parse_pair_code, DictionarySet};

pub mod engine;
pub use engine::{translate, Direction, Engine};

/// Engine configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Seed for fallback syllable selection. A per-call seed takes precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Carry the source word's capitalization over to its translation
    pub preserve_capitalization: bool,

    /// Collapse runs of spaces in encoded output to a single space
    pub collapse_spaces: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            preserve_capitalization: true,
            collapse_spaces: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    use super::*;
    use once_cell::sync::Lazy;
    use regex::Regex;

    static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid space regex"));

    /// Normalize a syllable for dictionary keys: NFC, then lower-case.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().to_lowercase()
    }

    /// Call-local random source, seeded when `seed` is given.
    pub fn rng_for(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Collapse runs of ASCII spaces into one space.
    pub fn collapse_spaces(s: &str) -> String {
        SPACE_RUN.replace_all(s, " ").into_owned()
    }

    /// Upper-case the first character and lower-case the rest.
    pub fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    /// True when `s` has at least one cased character and no lower-case ones.
    pub fn is_all_upper(s: &str) -> bool {
        let mut cased = false;
        for ch in s.chars() {
            if ch.is_lowercase() {
                return false;
            }
            cased |= ch.is_uppercase();
        }
        cased
    }

    /// Apply the capitalization of `source` to `translated`, word-level.
    ///
    /// - first char lower-case (or uncased): `translated` unchanged
    /// - all upper-case and at least 2 chars: `translated` upper-cased
    /// - otherwise: `translated` capitalized
    pub fn match_case(source: &str, translated: &str) -> String {
        let first_upper = source.chars().next().is_some_and(char::is_uppercase);
        if !first_upper {
            return translated.to_string();
        }
        if is_all_upper(source) && source.chars().count() >= 2 {
            translated.to_uppercase()
        } else {
            capitalize(translated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.seed, None);
        assert!(config.preserve_capitalization);
        assert!(config.collapse_spaces);
    }

    #[test]
    fn config_partial_toml_uses_defaults() {
        let config = Config::from_toml_str("seed = 7\ncollapse_spaces = false\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(!config.collapse_spaces);
        assert!(config.preserve_capitalization);
    }

    #[test]
    fn config_toml_string_roundtrip() {
        let config = Config {
            seed: Some(12),
            preserve_capitalization: false,
            collapse_spaces: true,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn match_case_rules() {
        assert_eq!(utils::match_case("Hello", "grakmog"), "Grakmog");
        assert_eq!(utils::match_case("WORLD", "durbul"), "DURBUL");
        assert_eq!(utils::match_case("world", "Durbul"), "Durbul");
        assert_eq!(utils::match_case("I", "ra"), "Ra");
        assert_eq!(utils::match_case("NASA2", "zug"), "ZUG");
        assert_eq!(utils::match_case("McDonald", "GROK"), "Grok");
    }

    #[test]
    fn collapse_spaces_only_touches_spaces() {
        assert_eq!(utils::collapse_spaces("a   b \t\tc"), "a b \t\tc");
    }

    #[test]
    fn normalize_lowercases_and_composes() {
        assert_eq!(utils::normalize("Cafe\u{301}"), "café");
    }
}
