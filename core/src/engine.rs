// core/src/engine.rs
//
// Translation engine: picks the encode or decode path from the dictionary's
// orientation. Every call is explicit and self-contained; the engine holds no
// mutable state, and the random source used for fallback syllables lives only
// for the duration of one call.

use tracing::trace;

use crate::decode::degibberify;
use crate::dictionary::{ForwardDictionary, Orientation, ReverseDictionary, SyllableDictionary};
use crate::encode::gibberify;
use crate::error::{GibberifyError, Result};
use crate::registry::{pair_code, DictionarySet};
use crate::syllable::{Syllabizer, VowelGroupSyllabizer};
use crate::{utils, Config};

/// Which way a translation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Source language -> constructed language.
    Encode,
    /// Constructed language -> approximate source language.
    Decode,
}

impl From<Orientation> for Direction {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Forward => Direction::Encode,
            Orientation::Reverse => Direction::Decode,
        }
    }
}

impl SyllableDictionary {
    /// The direction this dictionary translates in.
    pub fn direction(&self) -> Direction {
        self.orientation().into()
    }
}

/// Generic translation engine over a syllable segmentation rule.
///
/// Type parameter S is the syllabizer used on the encode path.
#[derive(Debug, Clone, Default)]
pub struct Engine<S = VowelGroupSyllabizer> {
    syllabizer: S,
    config: Config,
}

impl Engine<VowelGroupSyllabizer> {
    /// Engine with the default vowel-group syllabizer.
    pub fn new(config: Config) -> Self {
        Self::with_syllabizer(VowelGroupSyllabizer, config)
    }
}

impl<S: Syllabizer> Engine<S> {
    pub fn with_syllabizer(syllabizer: S, config: Config) -> Self {
        Self { syllabizer, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn syllabizer(&self) -> &S {
        &self.syllabizer
    }

    /// Encode `text` with a forward dictionary.
    ///
    /// `seed` overrides `Config::seed`; with neither, fallback syllables are
    /// drawn from OS entropy.
    pub fn encode(&self, dict: &ForwardDictionary, text: &str, seed: Option<u64>) -> Result<String> {
        let mut rng = utils::rng_for(seed.or(self.config.seed));
        gibberify(dict, text, &self.syllabizer, &mut rng, &self.config)
    }

    /// Decode `text` with a reverse dictionary. Never fails.
    pub fn decode(&self, dict: &ReverseDictionary, text: &str) -> String {
        degibberify(dict, text)
    }

    /// Translate `text` in the direction given by the dictionary's orientation.
    ///
    /// An empty dictionary is reported as `EmptyDictionary`.
    pub fn translate(&self, dict: &SyllableDictionary, text: &str, seed: Option<u64>) -> Result<String> {
        trace!(direction = ?dict.direction(), len = text.len(), "translate");
        match dict {
            SyllableDictionary::Forward(fd) => self.encode(fd, text, seed),
            SyllableDictionary::Reverse(rd) if rd.is_empty() => Err(GibberifyError::EmptyDictionary {
                code: "reverse".to_string(),
            }),
            SyllableDictionary::Reverse(rd) => Ok(self.decode(rd, text)),
        }
    }

    /// Resolve the dictionary for `lang_in -> lang_out` and translate with it.
    pub fn translate_pair(
        &self,
        dicts: &DictionarySet,
        lang_in: &str,
        lang_out: &str,
        text: &str,
        seed: Option<u64>,
    ) -> Result<String> {
        let dict = dicts.get(lang_in, lang_out)?;
        if dict.is_empty() {
            return Err(GibberifyError::EmptyDictionary {
                code: pair_code(lang_in, lang_out),
            });
        }
        self.translate(dict, text, seed)
    }
}

/// Translate with a default engine.
pub fn translate(dict: &SyllableDictionary, text: &str, seed: Option<u64>) -> Result<String> {
    Engine::new(Config::default()).translate(dict, text, seed)
}
