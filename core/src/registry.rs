//! Dictionary registry keyed by language pair.
//!
//! Dictionaries are stored under a pair code `"<in>-<out>"` (e.g. `en-orc`
//! for encoding English into orcish, `orc-en` for decoding it back). On disk a
//! registry is a directory of `<in>-<out>.bincode` or `<in>-<out>.json` files,
//! each holding one serialized `SyllableDictionary`.

use ahash::AHashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::dictionary::{ForwardDictionary, Orientation, ReverseDictionary, SyllableDictionary};
use crate::error::{GibberifyError, Result};

/// Build the registry key for a language pair.
pub fn pair_code(lang_in: &str, lang_out: &str) -> String {
    format!("{}-{}", lang_in, lang_out)
}

/// Split a pair code into `(lang_in, lang_out)`.
pub fn parse_pair_code(code: &str) -> Option<(&str, &str)> {
    let (lang_in, lang_out) = code.split_once('-')?;
    if lang_in.is_empty() || lang_out.is_empty() || lang_out.contains('-') {
        return None;
    }
    Some((lang_in, lang_out))
}

/// All dictionaries available to a translation session, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct DictionarySet {
    dicts: AHashMap<String, SyllableDictionary>,
}

impl DictionarySet {
    pub fn new() -> Self {
        Self {
            dicts: AHashMap::new(),
        }
    }

    /// Register `dict` for `lang_in -> lang_out`, replacing any previous one.
    pub fn insert<D: Into<SyllableDictionary>>(&mut self, lang_in: &str, lang_out: &str, dict: D) {
        self.dicts.insert(pair_code(lang_in, lang_out), dict.into());
    }

    /// Register a forward dictionary together with its derived reverse
    /// dictionary under the swapped pair.
    pub fn insert_pair(&mut self, lang_in: &str, lang_out: &str, forward: ForwardDictionary) {
        let reverse = ReverseDictionary::from_forward(&forward);
        self.insert(lang_in, lang_out, forward);
        self.insert(lang_out, lang_in, reverse);
    }

    /// Dictionary for a language pair.
    pub fn get(&self, lang_in: &str, lang_out: &str) -> Result<&SyllableDictionary> {
        self.dicts
            .get(&pair_code(lang_in, lang_out))
            .ok_or_else(|| GibberifyError::MissingDictionary {
                lang_in: lang_in.to_string(),
                lang_out: lang_out.to_string(),
            })
    }

    pub fn contains(&self, lang_in: &str, lang_out: &str) -> bool {
        self.dicts.contains_key(&pair_code(lang_in, lang_out))
    }

    /// Registered pair codes, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.dicts.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Registered pairs as `(lang_in, lang_out, orientation)`, sorted by code.
    pub fn pairs(&self) -> Vec<(String, String, Orientation)> {
        self.codes()
            .into_iter()
            .filter_map(|code| {
                let orientation = self.dicts.get(&code)?.orientation();
                let (lang_in, lang_out) = parse_pair_code(&code)?;
                Some((lang_in.to_string(), lang_out.to_string(), orientation))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.dicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dicts.is_empty()
    }

    /// Load every `<in>-<out>.bincode` / `<in>-<out>.json` file in `dir`.
    ///
    /// Files with other extensions are ignored. A dictionary file whose name
    /// is not a valid pair code is an error.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut set = Self::new();

        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        paths.sort();

        for path in paths {
            let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
            if !matches!(ext, "bincode" | "json") {
                debug!(path = %path.display(), "not a dictionary file, skipping");
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            let (lang_in, lang_out) = parse_pair_code(stem)
                .ok_or_else(|| GibberifyError::InvalidDictionaryName(path.clone()))?;

            let dict = if ext == "bincode" {
                SyllableDictionary::load_bincode(&path)?
            } else {
                SyllableDictionary::load_json(&path)?
            };
            debug!(
                code = stem,
                entries = dict.len(),
                orientation = ?dict.orientation(),
                "loaded dictionary"
            );
            set.insert(lang_in, lang_out, dict);
        }

        info!(count = set.len(), dir = %dir.display(), "loaded dictionaries");
        Ok(set)
    }

    /// Built-in `en-orc` / `orc-en` pair for smoke-testing.
    pub fn demo() -> Self {
        let mut set = Self::new();
        set.insert_pair("en", "orc", ForwardDictionary::load_demo());
        set
    }
}
