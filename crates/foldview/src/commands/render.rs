use anyhow::{Context, Result};
use foldview_core::StructurePayload;
use foldview_viewer::{StructureViewer, ViewerStyle};
use log::info;
use std::fs;
use std::path::PathBuf;

pub fn execute(input: PathBuf, output: PathBuf, style: ViewerStyle) -> Result<()> {
    let payload = StructurePayload::from_file(&input)?;
    let view = StructureViewer::new(style)?.render(&payload)?;
    let title = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Structure".to_string());
    fs::write(&output, view.standalone_page(&title))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("wrote {}", output.display());
    Ok(())
}
