pub mod analyze;
pub mod info;
pub mod predict;
pub mod render;

use foldview_core::{AminoAcid, CompositionProfile};

pub(crate) fn print_profile(profile: &CompositionProfile) {
    println!("Sequence Length: {} amino acids", profile.length);
    println!("Molecular Weight: {:.2} Da", profile.molecular_weight);
    println!("Estimated Isoelectric Point: {:.2}", profile.estimated_pi);
    println!();
    println!("Amino Acid Composition");
    for share in &profile.percentages {
        println!(
            "  {} {}  {:>4}  {:>6.2}%  {}",
            share.residue,
            AminoAcid::from_code1(share.residue).map_or("???", |aa| aa.code3()),
            share.count,
            share.percent,
            "#".repeat((share.percent / 2.0).round() as usize)
        );
    }
}
