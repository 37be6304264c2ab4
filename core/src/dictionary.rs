//! Syllable dictionaries for gibberify-core
//!
//! A dictionary describes how syllables translate for one ordered language
//! pair, and is built for exactly one orientation:
//!
//! - `ForwardDictionary`: normalized source syllable -> chosen target string.
//!   Used by the encode path. Several source syllables may share a target.
//! - `ReverseDictionary`: target strings bucketed by their length in chars,
//!   each mapping target -> source. Used by the decode path, longest bucket
//!   first.
//!
//! Both are plain ordered maps so that iteration (and therefore seeded random
//! fallback) is reproducible across runs. They are serializable with `serde`;
//! `SyllableDictionary` carries bincode and JSON helpers for the loaders.
//!
//! Dictionaries are built once and treated as read-only afterwards.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::utils;

/// Candidate targets per syllable, as produced by an external dictionary
/// builder. Duplicates in a candidate list weight the selection.
pub type CandidateTable = BTreeMap<String, Vec<String>>;

/// Which way a dictionary translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Forward,
    Reverse,
}

/// Syllable -> target mapping used for encoding.
///
/// Keys are normalized (NFC, lower-case) single syllables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardDictionary {
    map: BTreeMap<String, String>,
}

impl ForwardDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Map `syllable` to `target`, replacing any previous mapping.
    pub fn insert<K: AsRef<str>, V: Into<String>>(&mut self, syllable: K, target: V) {
        self.map
            .insert(utils::normalize(syllable.as_ref()), target.into());
    }

    /// Pick one target per syllable from a candidate table.
    ///
    /// Each candidate list is sampled uniformly, so a candidate listed twice is
    /// twice as likely. With a seed the choice is reproducible. Syllables with
    /// no candidates are skipped.
    pub fn from_candidates(table: &CandidateTable, seed: Option<u64>) -> Self {
        let mut rng = utils::rng_for(seed);
        let mut dict = Self::new();
        for (syllable, candidates) in table {
            match candidates.choose(&mut rng) {
                Some(choice) => dict.insert(syllable, choice.clone()),
                None => debug!(syllable = %syllable, "no candidates, skipping"),
            }
        }
        dict
    }

    /// Target for `syllable`, compared case-insensitively.
    pub fn lookup(&self, syllable: &str) -> Option<&str> {
        self.map.get(&utils::normalize(syllable)).map(String::as_str)
    }

    /// A uniformly chosen syllable from the full key set, or `None` when empty.
    pub fn fallback<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.map.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.map.len());
        self.map.keys().nth(idx).map(String::as_str)
    }

    /// Iterate `(syllable, target)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Small English -> orcish table for smoke-testing and the demo fallback.
    pub fn load_demo() -> Self {
        let mut fd = Self::new();
        for (syllable, target) in [
            ("hel", "grak"),
            ("lo", "mog"),
            ("world", "durbul"),
            ("the", "ush"),
            ("a", "ra"),
            ("war", "gazh"),
            ("is", "ob"),
            ("com", "thrak"),
            ("ing", "ork"),
            ("friend", "gruzg"),
            ("good", "nazg"),
            ("night", "burz"),
            ("to", "lug"),
            ("you", "gob"),
        ] {
            fd.insert(syllable, target);
        }
        fd
    }
}

/// Length-bucketed target -> source mapping used for decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseDictionary {
    buckets: BTreeMap<usize, BTreeMap<String, String>>,
}

impl ReverseDictionary {
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Map `target` back to `source`.
    ///
    /// Returns false (and keeps the existing mapping) when `target` is empty
    /// or already mapped.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, target: K, source: V) -> bool {
        let target = target.into();
        if target.is_empty() {
            return false;
        }
        let bucket = self.buckets.entry(target.chars().count()).or_default();
        if bucket.contains_key(&target) {
            return false;
        }
        bucket.insert(target, source.into());
        true
    }

    /// Derive the reverse mapping of a forward dictionary.
    ///
    /// When several syllables share a target, the first one in key order wins.
    pub fn from_forward(forward: &ForwardDictionary) -> Self {
        let mut rd = Self::new();
        let mut collisions = 0usize;
        for (syllable, target) in forward.iter() {
            if !rd.insert(target, syllable) {
                collisions += 1;
            }
        }
        debug!(
            entries = rd.len(),
            collisions, "derived reverse dictionary from forward"
        );
        rd
    }

    /// Syllable lengths present, longest first.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().rev().copied()
    }

    /// Buckets as `(length, target -> source)`, longest first.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &BTreeMap<String, String>)> {
        self.buckets.iter().rev().map(|(len, bucket)| (*len, bucket))
    }

    /// Source substring for an exact target substring.
    pub fn lookup(&self, target: &str) -> Option<&str> {
        self.buckets
            .get(&target.chars().count())
            .and_then(|b| b.get(target))
            .map(String::as_str)
    }

    /// Total number of mappings across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dictionary in either orientation, as supplied to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyllableDictionary {
    Forward(ForwardDictionary),
    Reverse(ReverseDictionary),
}

impl SyllableDictionary {
    pub fn orientation(&self) -> Orientation {
        match self {
            SyllableDictionary::Forward(_) => Orientation::Forward,
            SyllableDictionary::Reverse(_) => Orientation::Reverse,
        }
    }

    pub fn as_forward(&self) -> Option<&ForwardDictionary> {
        match self {
            SyllableDictionary::Forward(fd) => Some(fd),
            SyllableDictionary::Reverse(_) => None,
        }
    }

    pub fn as_reverse(&self) -> Option<&ReverseDictionary> {
        match self {
            SyllableDictionary::Reverse(rd) => Some(rd),
            SyllableDictionary::Forward(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SyllableDictionary::Forward(fd) => fd.len(),
            SyllableDictionary::Reverse(rd) => rd.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Save the dictionary to a file using bincode serialization.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Load a dictionary from a bincode file produced by `save_bincode`.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Save the dictionary as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load a dictionary from JSON produced by `save_json`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl From<ForwardDictionary> for SyllableDictionary {
    fn from(fd: ForwardDictionary) -> Self {
        SyllableDictionary::Forward(fd)
    }
}

impl From<ReverseDictionary> for SyllableDictionary {
    fn from(rd: ReverseDictionary) -> Self {
        SyllableDictionary::Reverse(rd)
    }
}
