//! # gibberify
//!
//! Gibberish generator front-end built on gibberify-core: configuration,
//! message input, language names and the interactive session used by the
//! `gibberify` binary.

pub mod config;
pub mod convert;
pub mod input;
pub mod languages;
pub mod repl;

// Re-export the engine surface from core
pub use gibberify_core::{
    translate, CandidateTable, Config, DictionarySet, Direction, Engine, ForwardDictionary,
    GibberifyError, Orientation, ReverseDictionary, SyllableDictionary,
};

pub use config::GibberifyConfig;
pub use convert::{convert_candidates, DictFormat};
pub use input::read_message;
pub use repl::{Reply, Session};
