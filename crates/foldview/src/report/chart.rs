//! Composition histogram as a standalone SVG document.
use foldview_core::CompositionProfile;
use svg::node::element::{Line, Rectangle, Text};
use svg::Document;

const BAR_WIDTH: f64 = 24.0;
const BAR_GAP: f64 = 8.0;
const PLOT_HEIGHT: f64 = 200.0;
const MARGIN: f64 = 30.0;
const BAR_COLOR: &str = "#4257B2";

/// One bar per residue present, tallest first, heights relative to the most
/// frequent residue.
pub fn composition_chart(profile: &CompositionProfile) -> Document {
    let bars = profile.percentages.len() as f64;
    let width = 2.0 * MARGIN + bars * (BAR_WIDTH + BAR_GAP);
    let height = PLOT_HEIGHT + 2.0 * MARGIN;
    let baseline = MARGIN + PLOT_HEIGHT;
    let max_percent = profile
        .percentages
        .first()
        .map(|share| share.percent)
        .unwrap_or(100.0);

    let axis = Line::new()
        .set("x1", MARGIN - BAR_GAP / 2.0)
        .set("y1", baseline)
        .set("x2", width - MARGIN + BAR_GAP / 2.0)
        .set("y2", baseline)
        .set("stroke", "#333333")
        .set("stroke-width", 1.0);

    let base_document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .set("class", "composition-chart")
        .set("font-family", "sans-serif")
        .set("font-size", 11.0)
        .add(axis);

    profile
        .percentages
        .iter()
        .enumerate()
        .fold(base_document, |doc, (i, share)| {
            let bar_height = share.percent / max_percent * PLOT_HEIGHT;
            let x = MARGIN + i as f64 * (BAR_WIDTH + BAR_GAP);
            let center = x + BAR_WIDTH / 2.0;
            doc.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", baseline - bar_height)
                    .set("width", BAR_WIDTH)
                    .set("height", bar_height)
                    .set("fill", BAR_COLOR)
                    .set("data-residue", share.residue.to_string()),
            )
            .add(
                Text::new(format!("{:.1}", share.percent))
                    .set("x", center)
                    .set("y", baseline - bar_height - 4.0)
                    .set("text-anchor", "middle"),
            )
            .add(
                Text::new(share.residue.to_string())
                    .set("x", center)
                    .set("y", baseline + 16.0)
                    .set("text-anchor", "middle"),
            )
        })
}
