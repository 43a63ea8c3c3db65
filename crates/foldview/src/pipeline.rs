//! # Pipeline
//!
//! One "Predict Structure" action: acquire, validate, analyze, predict.
//!
//! Input problems (empty, invalid residues, over the length ceiling, unreadable
//! file) end the action before the predictor is called. A prediction failure
//! is not an error of the pipeline itself: it is recorded in the report so the
//! composition statistics can still be shown.
//!
use foldview_client::{PredictionError, StructurePredictor};
use foldview_core::{
    CompositionProfile, InputError, InputSource, LengthPolicy, LengthStatus, Sequence,
    StructurePayload,
};
use log::{error, info, warn};

/// Result of a single prediction action.
#[derive(Debug)]
pub struct PredictionReport {
    pub source: String,
    pub sequence: Sequence,
    pub length_status: LengthStatus,
    /// Shown to the user when the sequence is long but allowed
    pub warning: Option<String>,
    pub profile: CompositionProfile,
    pub outcome: Result<StructurePayload, PredictionError>,
}

impl PredictionReport {
    pub fn payload(&self) -> Option<&StructurePayload> {
        self.outcome.as_ref().ok()
    }
}

pub struct Pipeline<'a> {
    predictor: &'a dyn StructurePredictor,
    policy: LengthPolicy,
}

impl<'a> Pipeline<'a> {
    pub fn new(predictor: &'a dyn StructurePredictor) -> Self {
        Self {
            predictor,
            policy: LengthPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn run(&self, input: &InputSource) -> Result<PredictionReport, InputError> {
        let sequence = input.read_sequence()?;
        info!("Sequence length: {} amino acids", sequence.len());

        let length_status = self.policy.check(&sequence)?;
        let warning = match length_status {
            LengthStatus::Long => Some(self.policy.warning()),
            LengthStatus::Normal => None,
        };
        if let Some(message) = &warning {
            warn!("{}", message);
        }

        let profile = CompositionProfile::from_sequence(&sequence);

        info!("Predicting protein structure... This may take a few minutes.");
        let outcome = self.predictor.predict(&sequence);
        match &outcome {
            Ok(payload) => info!(
                "Structure prediction successful! ({} bytes)",
                payload.as_bytes().len()
            ),
            Err(e) => error!("Prediction failed: {}", e),
        }

        Ok(PredictionReport {
            source: input.describe(),
            sequence,
            length_status,
            warning,
            profile,
            outcome,
        })
    }
}
