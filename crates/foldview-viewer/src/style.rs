//! Style
//!
//! Display directives handed to the viewer library.
use bon::Builder;
use clap::ValueEnum;
use serde_json::{json, Value};
use strum::Display;
use validator::Validate;

/// Representation of the molecule, named as the viewer library names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Representation {
    Cartoon,
    Stick,
    Sphere,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ColorScheme {
    /// Rainbow from N- to C-terminus
    Spectrum,
    /// One color per chain
    Chain,
}

impl ColorScheme {
    fn directive(&self) -> Value {
        match self {
            ColorScheme::Spectrum => json!({ "color": "spectrum" }),
            ColorScheme::Chain => json!({ "colorscheme": "chain" }),
        }
    }
}

/// Everything needed to set up a view.
#[derive(Debug, Clone, PartialEq, Builder, Validate)]
pub struct ViewerStyle {
    #[builder(default = Representation::Cartoon)]
    pub representation: Representation,
    #[builder(default = ColorScheme::Spectrum)]
    pub color: ColorScheme,
    /// Fit the camera to the whole structure
    #[builder(default = true)]
    pub zoom_to: bool,
    #[builder(default = 0.8)]
    #[validate(range(min = 0.1, max = 10.0))]
    pub zoom: f64,
    #[builder(default = false)]
    pub spin: bool,
    #[builder(default = 800)]
    #[validate(range(min = 100, max = 4000))]
    pub width: u32,
    #[builder(default = 500)]
    #[validate(range(min = 100, max = 4000))]
    pub height: u32,
}

impl Default for ViewerStyle {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ViewerStyle {
    /// The `setStyle` argument, e.g. `{"cartoon":{"color":"spectrum"}}`.
    pub fn style_spec(&self) -> Value {
        let mut spec = serde_json::Map::new();
        spec.insert(self.representation.to_string(), self.color.directive());
        Value::Object(spec)
    }
}
