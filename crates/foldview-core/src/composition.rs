//! # Composition
//!
//! Descriptive statistics derived from a validated [`Sequence`].
//!
//! The isoelectric point is a linear heuristic (7.0 shifted by 0.1 per net
//! basic residue), not a pKa-based titration. It is useful only as a rough
//! indication of net charge.
//!
use crate::residue::{weight_table, AminoAcid};
use crate::sequence::Sequence;
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

const PI_NEUTRAL: f64 = 7.0;
const PI_STEP: f64 = 0.1;
const PI_MIN: f64 = 1.0;
const PI_MAX: f64 = 14.0;

/// Sum of per-residue weights in daltons. Unknown letters contribute zero.
pub fn molecular_weight(sequence: &str) -> f64 {
    let table = weight_table();
    sequence
        .chars()
        .map(|c| table.get(&c).copied().unwrap_or(0.0))
        .sum()
}

/// `7.0 + 0.1 * (#basic - #acidic)`, clamped to `[1.0, 14.0]`.
pub fn estimate_isoelectric_point(sequence: &str) -> f64 {
    let (basic, acidic) = sequence
        .chars()
        .filter_map(AminoAcid::from_code1)
        .fold((0i64, 0i64), |(b, a), aa| {
            (b + aa.is_basic() as i64, a + aa.is_acidic() as i64)
        });
    (PI_NEUTRAL + PI_STEP * (basic - acidic) as f64).clamp(PI_MIN, PI_MAX)
}

/// Share of one residue type in a sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidueShare {
    pub residue: char,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionProfile {
    pub length: usize,
    pub molecular_weight: f64,
    pub estimated_pi: f64,
    pub counts: BTreeMap<char, usize>,
    /// Residues present in the sequence, by descending percentage
    pub percentages: Vec<ResidueShare>,
}

impl CompositionProfile {
    pub fn from_sequence(sequence: &Sequence) -> Self {
        let text = sequence.as_str();
        let length = sequence.len();
        let counts: BTreeMap<char, usize> = text.chars().counts().into_iter().collect();

        let percentages = counts
            .iter()
            .map(|(&residue, &count)| ResidueShare {
                residue,
                count,
                percent: count as f64 / length as f64 * 100.0,
            })
            .sorted_by(|a, b| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| a.residue.cmp(&b.residue))
            })
            .collect();

        Self {
            length,
            molecular_weight: molecular_weight(text),
            estimated_pi: estimate_isoelectric_point(text),
            counts,
            percentages,
        }
    }

    pub fn count(&self, residue: char) -> usize {
        self.counts.get(&residue).copied().unwrap_or(0)
    }
}
