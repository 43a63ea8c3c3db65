//! # Report
//!
//! The HTML page presenting one prediction: input summary, protein
//! properties, composition histogram, and either the 3-D view with a download
//! link or the error message. About and Help are static tabs.
//!
mod chart;

pub use chart::composition_chart;

use crate::content::{ABOUT, HELP};
use crate::pipeline::PredictionReport;
use chrono::{DateTime, Utc};
use foldview_core::{CompositionProfile, StructurePayload, STRUCTURE_FILE_NAME, STRUCTURE_MIME_TYPE};
use foldview_viewer::{escape_html, RenderCache, ViewerError, THREEDMOL_SCRIPT_URL};

pub const REPORT_FILE_NAME: &str = "report.html";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem; color: #262730; }
.main-header { font-size: 2.5rem; color: #4257B2; margin-bottom: 1rem; }
.sub-header { font-size: 1.5rem; color: #5C7AEA; margin-bottom: 1rem; }
.info-text { background-color: #f0f2f6; padding: 1rem; border-radius: 5px; margin-bottom: 1rem; }
.success-box { background-color: #d4edda; color: #155724; padding: 1rem; border-radius: 5px; margin-bottom: 1rem; }
.warning-box { background-color: #fff3cd; color: #856404; padding: 1rem; border-radius: 5px; margin-bottom: 1rem; }
.error-box { background-color: #f8d7da; color: #721c24; padding: 1rem; border-radius: 5px; margin-bottom: 1rem; white-space: pre-wrap; }
.columns { display: flex; gap: 2rem; flex-wrap: wrap; }
.tab-buttons button { font-size: 1rem; padding: 0.5rem 1rem; border: none; background: none; cursor: pointer; }
.tab-buttons button.active { border-bottom: 3px solid #4257B2; }
.tab { display: none; }
.tab.active { display: block; }
.download { display: inline-block; margin-top: 1rem; padding: 0.5rem 1rem; background-color: #4257B2; color: white; border-radius: 5px; text-decoration: none; }
.sequence { font-family: monospace; word-break: break-all; }
footer { margin-top: 3rem; color: #808495; font-size: 0.8rem; }
"#;

const TAB_SCRIPT: &str = r#"
document.querySelectorAll(".tab-buttons button").forEach(function(button) {
    button.addEventListener("click", function() {
        document.querySelectorAll(".tab-buttons button").forEach(function(b) { b.classList.remove("active"); });
        document.querySelectorAll(".tab").forEach(function(t) { t.classList.remove("active"); });
        button.classList.add("active");
        document.getElementById(button.dataset.tab).classList.add("active");
    });
});
"#;

/// `data:` URI holding the payload byte-for-byte.
pub fn download_href(payload: &StructurePayload) -> String {
    format!(
        "data:{};charset=utf-8,{}",
        STRUCTURE_MIME_TYPE,
        urlencoding::encode(payload.as_str())
    )
}

fn properties_panel(profile: &CompositionProfile) -> String {
    format!(
        r#"<div>
<h3 class="sub-header">Protein Properties</h3>
<div class="info-text">Sequence Length: {} amino acids</div>
<div class="info-text">Molecular Weight: {:.2} Da</div>
<div class="info-text">Estimated Isoelectric Point: {:.2}</div>
</div>
"#,
        profile.length, profile.molecular_weight, profile.estimated_pi
    )
}

fn composition_panel(profile: &CompositionProfile) -> String {
    format!(
        "<div>\n<h3 class=\"sub-header\">Amino Acid Composition</h3>\n{}\n</div>\n",
        composition_chart(profile)
    )
}

fn predict_tab(report: &PredictionReport, cache: &mut RenderCache) -> Result<String, ViewerError> {
    let mut html = String::from("<h2 class=\"sub-header\">Input Protein Sequence</h2>\n");
    html.push_str(&format!(
        "<div class=\"info-text\">Source: {}<br>Sequence length: {} amino acids<br><span class=\"sequence\">{}</span></div>\n",
        escape_html(&report.source),
        report.sequence.len(),
        report.sequence
    ));
    if let Some(warning) = &report.warning {
        html.push_str(&format!(
            "<div class=\"warning-box\">&#9888;&#65039; {}</div>\n",
            escape_html(warning)
        ));
    }
    html.push_str("<div class=\"columns\">\n");
    html.push_str(&properties_panel(&report.profile));
    html.push_str(&composition_panel(&report.profile));
    html.push_str("</div>\n");

    match &report.outcome {
        Ok(payload) => {
            let view = cache.render(payload)?;
            html.push_str("<div class=\"success-box\">&#9989; Structure prediction successful!</div>\n");
            html.push_str("<h3 class=\"sub-header\">Predicted 3D Structure</h3>\n");
            html.push_str(view.as_html());
            html.push_str(&format!(
                "<a class=\"download\" download=\"{}\" href=\"{}\">Download PDB File</a>\n",
                STRUCTURE_FILE_NAME,
                download_href(payload)
            ));
        }
        Err(e) => {
            html.push_str(&format!(
                "<div class=\"error-box\">{}</div>\n",
                escape_html(&e.to_string())
            ));
        }
    }
    Ok(html)
}

/// Assemble the full report page.
pub fn render_page(
    report: &PredictionReport,
    cache: &mut RenderCache,
    generated_at: DateTime<Utc>,
) -> Result<String, ViewerError> {
    let predict = predict_tab(report, cache)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Protein Structure Prediction</title>
<script src="{script}"></script>
<style>{style}</style>
</head>
<body>
<h1 class="main-header">&#129516; Protein Structure Prediction</h1>
<p>Predict and visualize protein structures using ESMFold</p>
<nav class="tab-buttons">
<button class="active" data-tab="tab-predict">Predict Structure</button>
<button data-tab="tab-about">About ESMFold</button>
<button data-tab="tab-help">Help</button>
</nav>
<section id="tab-predict" class="tab active">
{predict}</section>
<section id="tab-about" class="tab">
{about}</section>
<section id="tab-help" class="tab">
{help}</section>
<footer>Generated {generated} by foldview {version}</footer>
<script>{tabs}</script>
</body>
</html>
"#,
        script = THREEDMOL_SCRIPT_URL,
        style = STYLE,
        predict = predict,
        about = ABOUT.to_html(),
        help = HELP.to_html(),
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        version = env!("CARGO_PKG_VERSION"),
        tabs = TAB_SCRIPT,
    ))
}
