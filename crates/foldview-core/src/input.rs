//! # Input acquisition
//!
//! The three ways a user can supply a sequence: free text, an uploaded FASTA
//! file, or one of a fixed set of example proteins.
//!
use crate::error::InputError;
use clap::ValueEnum;
use crate::sequence::Sequence;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter};

/// File extensions accepted for sequence upload.
pub const FASTA_EXTENSIONS: [&str; 3] = ["fasta", "fa", "txt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum ExampleProtein {
    Bradykinin,
    InsulinB,
    LysozymeFragment,
}

impl ExampleProtein {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bradykinin => "Short peptide (Bradykinin)",
            Self::InsulinB => "Small protein (Insulin B chain)",
            Self::LysozymeFragment => "Medium protein (Lysozyme fragment)",
        }
    }

    pub fn sequence(&self) -> &'static str {
        match self {
            Self::Bradykinin => "RPPGFSPFR",
            Self::InsulinB => "FVNQHLCGSHLVEALYLVCGERGFFYTPKT",
            Self::LysozymeFragment => "KVFGRCELAAAMKRHGLDNYRGYSLGNWVCAAKFESNFNTQATNRNTDGSTDYGILQINSRWWCNDGRTPGSRNLCNIPCSALLSSDITASVNCAKKIVSDGNGMNAWVAWRNRCKGTDVQAWIRGCRL",
        }
    }
}

/// Where the candidate sequence comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    FastaFile(PathBuf),
    Example(ExampleProtein),
}

impl InputSource {
    /// Resolve the input method to a validated [`Sequence`].
    pub fn read_sequence(&self) -> Result<Sequence, InputError> {
        let sequence = match self {
            Self::Text(raw) => Sequence::parse(raw)?,
            Self::FastaFile(path) => Sequence::parse_fasta(&read_fasta_text(path)?)?,
            Self::Example(example) => {
                info!("using example sequence: {}", example.label());
                Sequence::parse(example.sequence())?
            }
        };
        Ok(sequence)
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Text(_) => "entered sequence".to_string(),
            Self::FastaFile(path) => format!("FASTA file {}", path.display()),
            Self::Example(example) => example.label().to_string(),
        }
    }
}

fn read_fasta_text(path: &Path) -> Result<String, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !FASTA_EXTENSIONS.contains(&extension.as_str()) {
        return Err(InputError::UnsupportedFileType(path.display().to_string()));
    }
    let bytes = fs::read(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8(path.display().to_string()))
}
