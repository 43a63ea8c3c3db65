//! Error types for sequence acquisition and validation.

use thiserror::Error;

/// Reasons a candidate sequence is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Nothing left after normalization
    #[error("Please enter a valid protein sequence.")]
    Empty,

    /// Characters outside the 20-letter alphabet, with 1-based positions
    #[error("{} Offending characters: {}", crate::INVALID_SEQUENCE_MESSAGE, format_offenders(.offenders))]
    InvalidResidues { offenders: Vec<(usize, char)> },

    /// Over the hard ceiling enforced before any network call
    #[error("Sequence is too long ({length} residues). Please use sequences with at most {max} amino acids.")]
    TooLong { length: usize, max: usize },
}

/// Failures while resolving an input method to raw text.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file type '{0}': expected one of .fasta, .fa, .txt")]
    UnsupportedFileType(String),

    #[error("File {0} is not valid UTF-8 text")]
    NotUtf8(String),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

fn format_offenders(offenders: &[(usize, char)]) -> String {
    const SHOWN: usize = 10;
    let mut listed = offenders
        .iter()
        .take(SHOWN)
        .map(|(pos, c)| format!("'{}' at {}", c.escape_debug(), pos))
        .collect::<Vec<_>>()
        .join(", ");
    if offenders.len() > SHOWN {
        listed.push_str(&format!(" and {} more", offenders.len() - SHOWN));
    }
    listed
}
