use super::print_profile;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use foldview::report::{render_page, REPORT_FILE_NAME};
use foldview::Pipeline;
use foldview_client::{EsmFoldClient, PredictorConfig};
use foldview_core::{InputSource, STRUCTURE_FILE_NAME};
use foldview_viewer::{RenderCache, StructureViewer, ViewerStyle};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const VIEWER_FILE_NAME: &str = "viewer.html";

pub fn execute(
    input: InputSource,
    output_dir: PathBuf,
    config: PredictorConfig,
    style: ViewerStyle,
) -> Result<()> {
    let client = EsmFoldClient::new(config).context("Invalid prediction service settings")?;
    let mut cache = RenderCache::new(StructureViewer::new(style)?);

    let report = Pipeline::new(&client).run(&input)?;
    print_profile(&report.profile);

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    // Outputs of an earlier run must not outlive this report.
    for name in [STRUCTURE_FILE_NAME, VIEWER_FILE_NAME] {
        remove_stale(&output_dir.join(name))?;
    }
    let report_path = output_dir.join(REPORT_FILE_NAME);
    let page = render_page(&report, &mut cache, Utc::now())?;
    fs::write(&report_path, page)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    let payload = match &report.outcome {
        Ok(payload) => payload,
        Err(e) => bail!("{} (report written to {})", e, report_path.display()),
    };

    let structure_path = output_dir.join(STRUCTURE_FILE_NAME);
    fs::write(&structure_path, payload.as_bytes())
        .with_context(|| format!("Failed to write {}", structure_path.display()))?;

    let viewer_path = output_dir.join(VIEWER_FILE_NAME);
    let view = cache.render(payload)?;
    fs::write(&viewer_path, view.standalone_page("Predicted 3D Structure"))
        .with_context(|| format!("Failed to write {}", viewer_path.display()))?;

    println!();
    println!("Structure prediction successful!");
    println!("Report:    {}", report_path.display());
    println!("Structure: {}", structure_path.display());
    println!("Viewer:    {}", viewer_path.display());
    Ok(())
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("removed stale {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}
