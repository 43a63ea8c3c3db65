//! Viewer
//!
//! Turns a [`StructurePayload`] into a self-contained 3Dmol.js snippet.
use crate::error::ViewerError;
use crate::style::ViewerStyle;
use foldview_core::StructurePayload;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::fmt::Write;
use std::hash::{Hash, Hasher};
use validator::Validate;

pub const THREEDMOL_SCRIPT_URL: &str = "https://3Dmol.org/build/3Dmol-min.js";

/// HTML for one interactive view. Requires the 3Dmol.js script on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    element_id: String,
    html: String,
}

impl RenderedView {
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn as_html(&self) -> &str {
        &self.html
    }

    /// A full HTML document holding only this view. `title` is plain text.
    pub fn standalone_page(&self, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{script}"></script>
</head>
<body>
{view}
</body>
</html>
"#,
            title = escape_html(title),
            script = THREEDMOL_SCRIPT_URL,
            view = self.html
        )
    }
}

pub struct StructureViewer {
    style: ViewerStyle,
}

impl Default for StructureViewer {
    fn default() -> Self {
        Self {
            style: ViewerStyle::default(),
        }
    }
}

impl StructureViewer {
    pub fn new(style: ViewerStyle) -> Result<Self, ViewerError> {
        style.validate()?;
        Ok(Self { style })
    }

    /// Build the view. Deterministic in the payload and style.
    pub fn render(&self, payload: &StructurePayload) -> Result<RenderedView, ViewerError> {
        let element_id = format!("foldview-{:016x}", fingerprint(payload));
        let model = script_literal(payload.as_str())?;
        let style = self.style.style_spec().to_string();

        let mut calls = String::new();
        writeln!(calls, "    viewer.addModel({}, \"pdb\");", model).ok();
        writeln!(calls, "    viewer.setStyle({{}}, {});", style).ok();
        if self.style.zoom_to {
            writeln!(calls, "    viewer.zoomTo();").ok();
        }
        if self.style.spin {
            writeln!(calls, "    viewer.spin(true);").ok();
        }
        writeln!(calls, "    viewer.zoom({});", self.style.zoom).ok();
        writeln!(calls, "    viewer.render();").ok();

        let html = format!(
            r#"<div id="{id}" class="foldview-viewer" style="width: {width}px; height: {height}px; position: relative;"></div>
<script>
(function() {{
    let element = document.getElementById("{id}");
    let viewer = $3Dmol.createViewer(element, {{ backgroundColor: "white" }});
{calls}}})();
</script>
"#,
            id = element_id,
            width = self.style.width,
            height = self.style.height,
            calls = calls
        );
        debug!("rendered view {} ({} payload bytes)", element_id, payload.as_bytes().len());
        Ok(RenderedView { element_id, html })
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn fingerprint(payload: &StructurePayload) -> u64 {
    let mut hasher = DefaultHasher::new();
    payload.hash(&mut hasher);
    hasher.finish()
}

/// JSON string literal safe to place inside a `<script>` element.
fn script_literal(text: &str) -> Result<String, ViewerError> {
    Ok(serde_json::to_string(text)?.replace("</", "<\\/"))
}
