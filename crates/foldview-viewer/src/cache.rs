//! Memoized rendering keyed by exact payload text.
use crate::error::ViewerError;
use crate::viewer::{RenderedView, StructureViewer};
use foldview_core::StructurePayload;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub struct RenderCache {
    viewer: StructureViewer,
    views: HashMap<StructurePayload, RenderedView>,
    hits: usize,
}

impl RenderCache {
    pub fn new(viewer: StructureViewer) -> Self {
        Self {
            viewer,
            views: HashMap::new(),
            hits: 0,
        }
    }

    pub fn render(&mut self, payload: &StructurePayload) -> Result<&RenderedView, ViewerError> {
        match self.views.entry(payload.clone()) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => Ok(entry.insert(self.viewer.render(payload)?)),
        }
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
