//! # foldview-core
//!
//! Sequence handling for the foldview structure prediction tool.
//!
//! __foldview-core__ provides functionality for:
//! * Normalizing and validating protein sequences from text, FASTA files or canned examples
//! * Computing simple compositional statistics (length, molecular weight, heuristic pI)
//! * Carrying the structure-file payload returned by a prediction service
//!
//! The main entry point is the [`Sequence`] struct, which can only be built from input
//! that passed validation, and the [`CompositionProfile`] derived from it.
//!
mod composition;
mod error;
mod input;
mod residue;
mod sequence;
mod structure;

pub use self::composition::{estimate_isoelectric_point, molecular_weight, CompositionProfile};
pub use self::error::{InputError, SequenceError};
pub use self::input::{ExampleProtein, InputSource, FASTA_EXTENSIONS};
pub use self::residue::{weight_table, AminoAcid, ALPHABET};
pub use self::sequence::{
    normalize, normalize_fasta, LengthPolicy, LengthStatus, Sequence, INVALID_SEQUENCE_MESSAGE,
};
pub use self::structure::{StructurePayload, STRUCTURE_FILE_NAME, STRUCTURE_MIME_TYPE};
