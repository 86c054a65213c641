//! Options file read by the `frequency_test` binary.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{error, info};

use crate::{error::Error, frequency::frequency_bit_test};

pub const DEFAULT_OPTIONS_PATH: &str = "options.json";

#[derive(Debug, Deserialize)]
#[serde(from = "RawOptions")]
pub struct Options {
    /// Results are appended here, one line per sequence.
    pub file_name: PathBuf,
    pub sequences: Vec<LabeledSequence>,
}

/// On-disk layout. The single-sequence `c++_sequence` and `java_sequence` keys are folded into
/// `sequences`, ahead of the list entries.
#[derive(Deserialize)]
struct RawOptions {
    file_name: PathBuf,
    #[serde(rename = "c++_sequence")]
    cpp_sequence: Option<String>,
    java_sequence: Option<String>,
    #[serde(default)]
    sequences: Vec<LabeledSequence>,
}

impl From<RawOptions> for Options {
    fn from(raw: RawOptions) -> Self {
        let keyed = [("C++", raw.cpp_sequence), ("Java", raw.java_sequence)]
            .into_iter()
            .filter_map(|(label, bits)| {
                bits.map(|bits| LabeledSequence {
                    label: label.to_owned(),
                    bits,
                })
            });
        let sequences = keyed.chain(raw.sequences).collect();
        Options {
            file_name: raw.file_name,
            sequences,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LabeledSequence {
    pub label: String,
    pub bits: String,
}

impl Options {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// Tests every sequence and appends `"{label} sequence: {chi:.16f}"` lines to
    /// `file_name`. Invalid sequences are logged and skipped. Returns the number of lines
    /// written.
    pub fn run(&self) -> Result<usize, Error> {
        let mut results = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_name)?;

        let mut written = 0;
        for sequence in &self.sequences {
            let chi_square = match frequency_bit_test(&sequence.bits) {
                Ok(value) => value,
                Err(e) => {
                    error!(label = %sequence.label, error = %e, "Skipping sequence");
                    continue;
                }
            };
            writeln!(results, "{} sequence: {chi_square:.16}", sequence.label)?;
            info!(label = %sequence.label, chi_square, path = %self.file_name.display(), "Result written");
            written += 1;
        }
        Ok(written)
    }
}
