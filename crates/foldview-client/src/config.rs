//! Settings for the prediction client.

use bon::Builder;
use validator::Validate;

/// Public ESMFold endpoint returning PDB text.
pub const ESMFOLD_ENDPOINT: &str = "https://api.esmatlas.com/foldSequence/v1/pdb/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Builder, Validate)]
pub struct PredictorConfig {
    #[builder(default = ESMFOLD_ENDPOINT.to_string(), into)]
    #[validate(url)]
    pub endpoint: String,
    /// Upper bound on the whole request, connect to last body byte.
    #[builder(default = DEFAULT_TIMEOUT_SECS)]
    #[validate(range(min = 1, max = 600))]
    pub timeout_secs: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
