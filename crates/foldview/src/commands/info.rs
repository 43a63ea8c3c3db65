use anyhow::Result;
use foldview::content::{ABOUT, HELP};
use foldview_core::ExampleProtein;
use strum::IntoEnumIterator;

pub fn examples() -> Result<()> {
    for example in ExampleProtein::iter() {
        println!(
            "{:<18} {:<36} {} aa",
            example.to_string(),
            example.label(),
            example.sequence().len()
        );
    }
    Ok(())
}

pub fn about() -> Result<()> {
    print!("{}", ABOUT.to_text());
    Ok(())
}

pub fn guide() -> Result<()> {
    print!("{}", HELP.to_text());
    Ok(())
}
