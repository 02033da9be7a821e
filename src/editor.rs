use glam::Vec3;
use log::{debug, info};

use crate::camera::Camera;
use crate::error::EditorError;
use crate::movement::{try_move, Direction, MoveOutcome};
use crate::picking::{pick, pixel_to_ndc};
use crate::placement::spawn_height;
use crate::registry::{SceneRegistry, ShapeKey};
use crate::selection::Selection;
use crate::shape::{Shape, ShapeKind};

/// The whole editor session: shape registry, selection, and camera.
///
/// Everything the event handlers mutate lives here; the renderer only reads
/// it. Constructed once at startup and dropped when the window closes.
pub struct EditorState {
    pub registry: SceneRegistry,
    pub selection: Selection,
    pub camera: Camera,
}

impl EditorState {
    pub fn new(aspect: f32) -> Self {
        Self {
            registry: SceneRegistry::new(),
            selection: Selection::new(),
            camera: Camera::new(aspect),
        }
    }

    /// Spawns a shape of `kind` at the origin, at a height that clears any
    /// shapes already stacked there. The new shape becomes the selection.
    pub fn add_shape(&mut self, kind: ShapeKind) -> ShapeKey {
        let y = spawn_height(&self.registry);
        let shape = Shape::with_random_color(kind, Vec3::new(0.0, y, 0.0));
        let key = self.registry.add(shape);
        self.selection.select(key);
        info!("added {} at y={}", kind, y);
        key
    }

    /// Spawns from a selector string, failing on unrecognized kinds.
    pub fn add_shape_by_name(&mut self, name: &str) -> Result<ShapeKey, EditorError> {
        let kind: ShapeKind = name.parse()?;
        Ok(self.add_shape(kind))
    }

    /// Removes the most recently added shape. A selection pointing at the
    /// removed shape is cleared so it can never go stale.
    pub fn remove_last(&mut self) {
        if let Some(removed) = self.registry.remove_last() {
            if self.selection.key() == Some(removed) {
                self.selection.clear();
            }
            debug!("removed last shape, {} remain", self.registry.len());
        }
    }

    /// Applies a direction command to the selected shape.
    pub fn move_selected(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = try_move(&mut self.registry, &self.selection, direction);
        if outcome == MoveOutcome::Blocked {
            debug!("move {} blocked by collision", direction.label());
        }
        outcome
    }

    /// Resolves a click at viewport pixel coordinates to a shape and selects
    /// it. Clicks through empty space leave the selection unchanged.
    pub fn pick_at(&mut self, px: f32, py: f32, width: f32, height: f32) -> Option<ShapeKey> {
        let (ndc_x, ndc_y) = pixel_to_ndc(px, py, width, height);
        let hit = pick(&self.registry, &self.camera, ndc_x, ndc_y);
        if let Some(key) = hit {
            self.selection.select(key);
        }
        hit
    }

    /// Status line for the UI overlay.
    pub fn status_line(&self) -> String {
        self.selection.status_label(&self.registry)
    }
}
