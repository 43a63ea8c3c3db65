use super::print_profile;
use anyhow::Result;
use foldview_core::{CompositionProfile, InputSource, LengthPolicy, LengthStatus};
use log::warn;

pub fn execute(input: InputSource, json: bool) -> Result<()> {
    let sequence = input.read_sequence()?;
    let profile = CompositionProfile::from_sequence(&sequence);

    let policy = LengthPolicy::default();
    match policy.check(&sequence) {
        Ok(LengthStatus::Long) => warn!("{}", policy.warning()),
        Err(e) => warn!("{} Prediction would be rejected.", e),
        Ok(LengthStatus::Normal) => {}
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }
    Ok(())
}
