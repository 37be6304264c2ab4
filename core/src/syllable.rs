// core/src/syllable.rs
//
// Syllable segmentation used on the encode path.
//
// The rule is pluggable through the `Syllabizer` trait; the engine only relies
// on the output being deterministic and covering the whole word.

/// Trait that syllable segmentation rules must implement to work with the `Engine`.
pub trait Syllabizer {
    /// Split a single word (no surrounding whitespace or punctuation) into
    /// non-empty syllables whose concatenation equals `word`.
    fn syllabize<'a>(&self, word: &'a str) -> Vec<&'a str>;
}

/// Vowel-group heuristic.
///
/// Every syllable carries exactly one vowel group. Leading consonants join the
/// first syllable and trailing consonants the last one. Between two vowel
/// groups a single consonant starts the next syllable, while a longer cluster
/// keeps its first consonant on the previous syllable ("hel-lo", "ba-na-na").
/// Words without any vowel are returned whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelGroupSyllabizer;

impl VowelGroupSyllabizer {
    pub fn new() -> Self {
        Self
    }

    /// Per-character vowel flags for `chars`.
    ///
    /// A word-initial `y` followed by a vowel is a consonant ("yes", "you").
    fn vowel_flags(chars: &[(usize, char)]) -> Vec<bool> {
        let mut flags: Vec<bool> = chars.iter().map(|&(_, c)| is_vowel(c)).collect();
        if flags.len() > 1 && matches!(chars[0].1, 'y' | 'Y') && flags[1] {
            flags[0] = false;
        }
        flags
    }
}

impl Syllabizer for VowelGroupSyllabizer {
    fn syllabize<'a>(&self, word: &'a str) -> Vec<&'a str> {
        if word.is_empty() {
            return Vec::new();
        }

        let chars: Vec<(usize, char)> = word.char_indices().collect();
        let flags = Self::vowel_flags(&chars);

        // Maximal vowel runs as (start, end) char indices
        let mut groups: Vec<(usize, usize)> = Vec::new();
        let mut i = 0;
        while i < flags.len() {
            if flags[i] {
                let start = i;
                while i < flags.len() && flags[i] {
                    i += 1;
                }
                groups.push((start, i));
            } else {
                i += 1;
            }
        }

        if groups.len() < 2 {
            return vec![word];
        }

        let mut cuts: Vec<usize> = Vec::with_capacity(groups.len() - 1);
        for pair in groups.windows(2) {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            let cluster = next_start - prev_end;
            let cut = if cluster <= 1 { prev_end } else { prev_end + 1 };
            cuts.push(chars[cut].0);
        }

        let mut syllables = Vec::with_capacity(cuts.len() + 1);
        let mut last = 0;
        for cut in cuts {
            syllables.push(&word[last..cut]);
            last = cut;
        }
        syllables.push(&word[last..]);
        syllables
    }
}

/// Whether `ch` is treated as a vowel (case-insensitive, common Latin accents included).
pub fn is_vowel(ch: char) -> bool {
    ch.to_lowercase().any(|c| {
        matches!(
            c,
            'a' | 'e' | 'i' | 'o' | 'u' | 'y'
                | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'æ'
                | 'è' | 'é' | 'ê' | 'ë'
                | 'ì' | 'í' | 'î' | 'ï'
                | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø'
                | 'ù' | 'ú' | 'û' | 'ü'
                | 'ý' | 'ÿ'
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(word: &str) -> Vec<&str> {
        VowelGroupSyllabizer::new().syllabize(word)
    }

    #[test]
    fn splits_between_vowel_groups() {
        assert_eq!(syl("hello"), vec!["hel", "lo"]);
        assert_eq!(syl("banana"), vec!["ba", "na", "na"]);
        assert_eq!(syl("translation"), vec!["tran", "sla", "tion"]);
    }

    #[test]
    fn single_group_words_stay_whole() {
        assert_eq!(syl("world"), vec!["world"]);
        assert_eq!(syl("a"), vec!["a"]);
        assert_eq!(syl("rhythm"), vec!["rhythm"]);
    }

    #[test]
    fn words_without_vowels_stay_whole() {
        assert_eq!(syl("2024"), vec!["2024"]);
        assert_eq!(syl("shh"), vec!["shh"]);
    }

    #[test]
    fn initial_y_before_vowel_is_consonant() {
        assert_eq!(syl("yes"), vec!["yes"]);
        assert_eq!(syl("yellow"), vec!["yel", "low"]);
    }

    #[test]
    fn accented_vowels_and_case() {
        assert_eq!(syl("café"), vec!["ca", "fé"]);
        assert_eq!(syl("HELLO"), vec!["HEL", "LO"]);
    }

    #[test]
    fn empty_word_has_no_syllables() {
        assert!(syl("").is_empty());
    }

    #[test]
    fn concatenation_is_lossless() {
        for word in ["extraordinary", "queueing", "strengths", "Ångström", "x_y_z"] {
            let parts = syl(word);
            assert!(parts.iter().all(|p| !p.is_empty()));
            assert_eq!(parts.concat(), word);
        }
    }
}
