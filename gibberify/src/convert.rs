//! Turn a candidate table into a ready-to-load dictionary pair.
//!
//! The input is a JSON object mapping each source syllable to its candidate
//! targets (duplicates weight the choice). One target is picked per syllable,
//! and both the forward dictionary and its derived reverse are written to the
//! output directory as `<in>-<out>.<ext>` and `<out>-<in>.<ext>`.

use anyhow::Context;
use gibberify_core::{
    pair_code, CandidateTable, ForwardDictionary, ReverseDictionary, SyllableDictionary,
};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// File format for written dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DictFormat {
    Bincode,
    Json,
}

impl DictFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DictFormat::Bincode => "bincode",
            DictFormat::Json => "json",
        }
    }
}

fn save(dict: &SyllableDictionary, path: &Path, format: DictFormat) -> anyhow::Result<()> {
    match format {
        DictFormat::Bincode => dict.save_bincode(path)?,
        DictFormat::Json => dict.save_json(path)?,
    }
    Ok(())
}

/// Read a candidate table from JSON.
pub fn load_candidates(path: &Path) -> anyhow::Result<CandidateTable> {
    let file = File::open(path)
        .with_context(|| format!("failed to open candidate table {}", path.display()))?;
    let table = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse candidate table {}", path.display()))?;
    Ok(table)
}

/// Build and write the dictionary pair; returns the forward and reverse paths.
pub fn convert_candidates(
    input: &Path,
    lang_in: &str,
    lang_out: &str,
    out_dir: &Path,
    format: DictFormat,
    seed: Option<u64>,
) -> anyhow::Result<(PathBuf, PathBuf)> {
    let table = load_candidates(input)?;
    let forward = ForwardDictionary::from_candidates(&table, seed);
    if forward.is_empty() {
        anyhow::bail!("candidate table {} has no usable entries", input.display());
    }
    let reverse = ReverseDictionary::from_forward(&forward);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let ext = format.extension();
    let forward_path = out_dir.join(format!("{}.{}", pair_code(lang_in, lang_out), ext));
    let reverse_path = out_dir.join(format!("{}.{}", pair_code(lang_out, lang_in), ext));

    info!(
        syllables = forward.len(),
        reverse = reverse.len(),
        "writing dictionary pair"
    );
    save(&forward.into(), &forward_path, format)?;
    save(&reverse.into(), &reverse_path, format)?;

    Ok((forward_path, reverse_path))
}
