use crate::registry::{SceneRegistry, ShapeKey};
use crate::shape::Shape;

/// Zero-or-one selected shape, held by key rather than by reference so a
/// removal can never leave a dangling selection.
#[derive(Default, Copy, Clone, Debug)]
pub struct Selection {
    key: Option<ShapeKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, key: ShapeKey) {
        self.key = Some(key);
    }

    pub fn clear(&mut self) {
        self.key = None;
    }

    pub fn key(&self) -> Option<ShapeKey> {
        self.key
    }

    /// The selected shape, or `None` when nothing is selected or the key no
    /// longer resolves in the registry.
    pub fn resolve<'a>(&self, registry: &'a SceneRegistry) -> Option<&'a Shape> {
        registry.get(self.key?)
    }

    /// Status text for the UI: the selected shape's kind label, or "none".
    pub fn status_label(&self, registry: &SceneRegistry) -> String {
        match self.resolve(registry) {
            Some(shape) => format!("Selected: {}", shape.kind),
            None => "Selected: none".to_string(),
        }
    }
}
