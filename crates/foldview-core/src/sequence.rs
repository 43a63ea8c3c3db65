//! # Sequence
//!
//! Normalization and validation of candidate protein sequences.
//!
//! Raw text from any input method passes through [`normalize`] (or
//! [`normalize_fasta`] for file content) and is then checked against the
//! 20-letter alphabet by [`Sequence::parse`]. A [`Sequence`] can only be
//! obtained through that path, so every downstream consumer can rely on the
//! alphabet invariant.
//!
use crate::error::SequenceError;
use crate::residue::AminoAcid;
use log::debug;
use std::fmt;

pub const INVALID_SEQUENCE_MESSAGE: &str =
    "Invalid sequence! Please use only standard amino acid letters (ACDEFGHIKLMNPQRSTVWY).";

/// Trim, uppercase, and drop every whitespace character.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Normalize FASTA text: header lines (`>`) are discarded and the remaining
/// lines concatenated.
pub fn normalize_fasta(text: &str) -> String {
    let body: String = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('>'))
        .collect();
    normalize(&body)
}

/// A validated protein sequence over the standard amino-acid alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    /// Normalize and validate raw text.
    pub fn parse(raw: &str) -> Result<Self, SequenceError> {
        Self::from_normalized(normalize(raw))
    }

    /// Normalize FASTA text and validate it.
    pub fn parse_fasta(text: &str) -> Result<Self, SequenceError> {
        Self::from_normalized(normalize_fasta(text))
    }

    fn from_normalized(normalized: String) -> Result<Self, SequenceError> {
        if normalized.is_empty() {
            return Err(SequenceError::Empty);
        }
        let offenders: Vec<(usize, char)> = normalized
            .chars()
            .enumerate()
            .filter(|(_, c)| AminoAcid::from_code1(*c).is_none())
            .map(|(i, c)| (i + 1, c))
            .collect();
        if !offenders.is_empty() {
            debug!("rejected sequence with {} invalid characters", offenders.len());
            return Err(SequenceError::InvalidResidues { offenders });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn residues(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        // alphabet is guaranteed by construction
        self.0.chars().filter_map(AminoAcid::from_code1)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a sequence length relates to the service limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthStatus {
    Normal,
    /// Allowed, but likely slow or failure-prone
    Long,
}

/// Length limits applied before a prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    pub warn_above: usize,
    pub max_length: usize,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            warn_above: 400,
            max_length: 1000,
        }
    }
}

impl LengthPolicy {
    pub fn check(&self, sequence: &Sequence) -> Result<LengthStatus, SequenceError> {
        let length = sequence.len();
        if length > self.max_length {
            Err(SequenceError::TooLong {
                length,
                max: self.max_length,
            })
        } else if length > self.warn_above {
            Ok(LengthStatus::Long)
        } else {
            Ok(LengthStatus::Normal)
        }
    }

    pub fn warning(&self) -> String {
        format!(
            "Warning: Long sequences (>{} amino acids) may take several minutes to complete or potentially fail.",
            self.warn_above
        )
    }
}
