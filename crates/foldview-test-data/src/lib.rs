//! foldview-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use foldview_test_data::TestFile;
/// let (pdb_file, _temp) = TestFile::predicted_01().create_temp().unwrap();
/// let (fasta_file, _temp) = TestFile::fasta_insulin_b().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Small predicted structure for Bradykinin (RPPGFSPFR).
    /// Backbone plus CB atoms, pLDDT-like values in the B-factor column.
    pub fn predicted_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/bradykinin_predicted.pdb"),
            suffix: "pdb",
        }
    }
    /// Insulin B chain with a header line, wrapped over three lines.
    pub fn fasta_insulin_b() -> Self {
        Self {
            filebinary: include_bytes!("../data/fasta/insulin_b.fasta"),
            suffix: "fasta",
        }
    }
    /// FASTA record containing nucleotide and ambiguity codes.
    pub fn fasta_invalid() -> Self {
        Self {
            filebinary: include_bytes!("../data/fasta/invalid.fasta"),
            suffix: "fa",
        }
    }

    pub fn bytes(&self) -> &'static [u8] {
        self.filebinary
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
