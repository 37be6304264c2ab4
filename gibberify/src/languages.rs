//! Display names for language codes used in dictionary pair codes.

use phf::phf_map;

/// Natural languages dictionaries are usually built from.
static REAL_LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "en" => "English",
    "de" => "German",
    "es" => "Spanish",
    "fr" => "French",
    "it" => "Italian",
    "pt" => "Portuguese",
    "nl" => "Dutch",
};

/// Constructed gibberish languages.
static GIBBERISH_LANGUAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "orc" => "Orcish",
    "elv" => "Elvish",
    "dwa" => "Dwarvish",
    "gob" => "Goblin",
    "tro" => "Trollish",
};

/// Human-readable name for a language code; unknown codes are returned as-is.
pub fn display_name(code: &str) -> &str {
    REAL_LANGUAGES
        .get(code)
        .or_else(|| GIBBERISH_LANGUAGES.get(code))
        .copied()
        .unwrap_or(code)
}

/// Whether `code` names a constructed language.
pub fn is_gibberish(code: &str) -> bool {
    GIBBERISH_LANGUAGES.contains_key(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_codes() {
        assert_eq!(display_name("en"), "English");
        assert_eq!(display_name("orc"), "Orcish");
        assert_eq!(display_name("xx"), "xx");
        assert!(is_gibberish("elv"));
        assert!(!is_gibberish("de"));
    }
}
