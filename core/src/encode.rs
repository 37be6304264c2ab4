// core/src/encode.rs
//
// Encode ("gibberify") path: source text -> constructed language.

use rand::Rng;
use tracing::trace;

use crate::dictionary::ForwardDictionary;
use crate::error::{GibberifyError, Result};
use crate::syllable::Syllabizer;
use crate::token::{tokenize, Token};
use crate::{utils, Config};

/// Translate `text` syllable by syllable through a forward dictionary.
///
/// Separators are copied verbatim. Syllables missing from the dictionary are
/// replaced with a syllable drawn from `rng`, so every word produces output.
/// Capitalization is carried over per word and runs of spaces are collapsed,
/// both subject to `config`.
///
/// Fails only when the dictionary is empty.
pub fn gibberify<S, R>(
    dict: &ForwardDictionary,
    text: &str,
    syllabizer: &S,
    rng: &mut R,
    config: &Config,
) -> Result<String>
where
    S: Syllabizer + ?Sized,
    R: Rng + ?Sized,
{
    if dict.is_empty() {
        return Err(GibberifyError::EmptyDictionary {
            code: "forward".to_string(),
        });
    }

    let mut out = String::with_capacity(text.len());
    let mut words = 0usize;
    for token in tokenize(text) {
        match token {
            Token::Separator(sep) => out.push_str(sep),
            Token::Word(word) => {
                words += 1;
                out.push_str(&translate_word(dict, word, syllabizer, rng, config));
            }
        }
    }
    trace!(words, "gibberified text");

    if config.collapse_spaces {
        Ok(utils::collapse_spaces(&out))
    } else {
        Ok(out)
    }
}

fn translate_word<S, R>(
    dict: &ForwardDictionary,
    word: &str,
    syllabizer: &S,
    rng: &mut R,
    config: &Config,
) -> String
where
    S: Syllabizer + ?Sized,
    R: Rng + ?Sized,
{
    let mut translated = String::new();
    for syllable in syllabizer.syllabize(word) {
        let target = match dict.lookup(syllable) {
            Some(target) => target,
            None => dict.fallback(rng).unwrap_or_default(),
        };
        translated.push_str(target);
    }

    if config.preserve_capitalization {
        utils::match_case(word, &translated)
    } else {
        translated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::VowelGroupSyllabizer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(dict: &ForwardDictionary, text: &str, config: &Config) -> Result<String> {
        let mut rng = StdRng::seed_from_u64(3);
        gibberify(dict, text, &VowelGroupSyllabizer, &mut rng, config)
    }

    #[test]
    fn known_syllables_are_substituted() {
        let out = run(&ForwardDictionary::load_demo(), "hello world", &Config::default()).unwrap();
        assert_eq!(out, "grakmog durbul");
    }

    #[test]
    fn separators_pass_through() {
        let out = run(&ForwardDictionary::load_demo(), "hello, world!", &Config::default()).unwrap();
        assert_eq!(out, "grakmog, durbul!");
    }

    #[test]
    fn capitalization_follows_source_word() {
        let out = run(&ForwardDictionary::load_demo(), "Hello WORLD", &Config::default()).unwrap();
        assert_eq!(out, "Grakmog DURBUL");
    }

    #[test]
    fn capitalization_can_be_disabled() {
        let config = Config {
            preserve_capitalization: false,
            ..Config::default()
        };
        // Syllables are looked up case-insensitively, output keeps dictionary case
        let out = run(&ForwardDictionary::load_demo(), "Hello WORLD", &config).unwrap();
        assert_eq!(out, "grakmog durbul");
    }

    #[test]
    fn empty_targets_leave_single_spaces() {
        let mut fd = ForwardDictionary::new();
        fd.insert("hel", "ka");
        fd.insert("lo", "");
        fd.insert("o", "");
        let out = run(&fd, "hello o hello", &Config::default()).unwrap();
        assert_eq!(out, "ka ka");
    }

    #[test]
    fn space_collapsing_can_be_disabled() {
        let mut fd = ForwardDictionary::new();
        fd.insert("o", "");
        fd.insert("hi", "zug");
        let config = Config {
            collapse_spaces: false,
            ..Config::default()
        };
        let out = run(&fd, "hi o hi", &config).unwrap();
        assert_eq!(out, "zug  zug");
    }

    #[test]
    fn missing_syllables_fall_back_to_dictionary_keys() {
        let mut fd = ForwardDictionary::new();
        fd.insert("ka", "zug");
        // "xyz" has no dictionary entry, the only key is "ka"
        let out = run(&fd, "xyz", &Config::default()).unwrap();
        assert_eq!(out, "ka");
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let err = run(&ForwardDictionary::new(), "hello", &Config::default()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn empty_text_encodes_to_empty() {
        let out = run(&ForwardDictionary::load_demo(), "", &Config::default()).unwrap();
        assert_eq!(out, "");
    }
}
