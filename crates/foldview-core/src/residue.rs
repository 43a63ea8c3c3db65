//! # Residues
//!
//! The twenty standard amino acids and the fixed per-residue weight table.
//!
//! Weights are the free amino-acid masses in daltons. They are summed without
//! subtracting water for peptide bonds, so totals are an upper estimate.
//!
use std::collections::HashMap;
use std::sync::OnceLock;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// One-letter codes accepted by the validator, in alphabetical order.
pub const ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

macro_rules! define_amino_acids {
    ($($name:ident: $code1:literal, $code3:literal, $weight:literal),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter)]
        pub enum AminoAcid {
            $($name),*
        }

        impl AminoAcid {
            pub const fn code1(&self) -> char {
                match self {
                    $(Self::$name => $code1),*
                }
            }
            pub const fn code3(&self) -> &'static str {
                match self {
                    $(Self::$name => $code3),*
                }
            }
            /// Molecular weight in daltons.
            pub const fn weight(&self) -> f64 {
                match self {
                    $(Self::$name => $weight),*
                }
            }
            pub const fn from_code1(code: char) -> Option<Self> {
                match code {
                    $($code1 => Some(Self::$name),)*
                    _ => None,
                }
            }
        }
    }
}

#[rustfmt::skip]
define_amino_acids! {
    Ala: 'A', "ALA",  89.09,
    Arg: 'R', "ARG", 174.20,
    Asn: 'N', "ASN", 132.12,
    Asp: 'D', "ASP", 133.10,
    Cys: 'C', "CYS", 121.16,
    Gln: 'Q', "GLN", 146.15,
    Glu: 'E', "GLU", 147.13,
    Gly: 'G', "GLY",  75.07,
    His: 'H', "HIS", 155.16,
    Ile: 'I', "ILE", 131.17,
    Leu: 'L', "LEU", 131.17,
    Lys: 'K', "LYS", 146.19,
    Met: 'M', "MET", 149.21,
    Phe: 'F', "PHE", 165.19,
    Pro: 'P', "PRO", 115.13,
    Ser: 'S', "SER", 105.09,
    Thr: 'T', "THR", 119.12,
    Trp: 'W', "TRP", 204.23,
    Tyr: 'Y', "TYR", 181.19,
    Val: 'V', "VAL", 117.15,
}

impl AminoAcid {
    /// R, K and H
    pub const fn is_basic(&self) -> bool {
        matches!(self, Self::Arg | Self::Lys | Self::His)
    }
    /// D and E
    pub const fn is_acidic(&self) -> bool {
        matches!(self, Self::Asp | Self::Glu)
    }
}

static WEIGHTS: OnceLock<HashMap<char, f64>> = OnceLock::new();

/// Process-wide lookup from one-letter code to molecular weight.
pub fn weight_table() -> &'static HashMap<char, f64> {
    WEIGHTS.get_or_init(|| AminoAcid::iter().map(|aa| (aa.code1(), aa.weight())).collect())
}
