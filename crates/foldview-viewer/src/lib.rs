//! # foldview-viewer
//!
//! Embeds structure-file payloads in an interactive [3Dmol.js](https://3dmol.csb.pitt.edu/)
//! view.
//!
//! The contract is payload text in, HTML out. Payloads from the prediction
//! client and payloads read from a local file take the same path, and no
//! well-formedness check is made here: a malformed file is the viewer
//! library's problem.
//!
//! ```
//! use foldview_core::StructurePayload;
//! use foldview_viewer::{StructureViewer, ViewerStyle};
//!
//! let viewer = StructureViewer::new(ViewerStyle::builder().spin(true).build()).unwrap();
//! let view = viewer.render(&StructurePayload::new("END\n")).unwrap();
//! assert!(view.as_html().contains("viewer.spin(true)"));
//! ```
mod cache;
mod error;
mod style;
mod viewer;

pub use self::cache::RenderCache;
pub use self::error::ViewerError;
pub use self::style::{ColorScheme, Representation, ViewerStyle};
pub use self::viewer::{escape_html, RenderedView, StructureViewer, THREEDMOL_SCRIPT_URL};
