//! # foldview-client
//!
//! Client for a remote structure-prediction service (the ESMFold API of the
//! ESM Metagenomic Atlas by default).
//!
//! One call to [`StructurePredictor::predict`] issues exactly one blocking
//! `POST` with a bounded timeout. There is no retry.
//!
//! ```no_run
//! use foldview_client::{EsmFoldClient, PredictorConfig, StructurePredictor};
//! use foldview_core::Sequence;
//!
//! let client = EsmFoldClient::new(PredictorConfig::default())?;
//! let payload = client.predict(&Sequence::parse("RPPGFSPFR")?)?;
//! println!("{}", payload.as_str());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
mod client;
mod config;
mod error;

pub use self::client::{EsmFoldClient, StructurePredictor, FORM_CONTENT_TYPE};
pub use self::config::{PredictorConfig, DEFAULT_TIMEOUT_SECS, ESMFOLD_ENDPOINT};
pub use self::error::PredictionError;
