use slotmap::SlotMap;

use crate::shape::Shape;

slotmap::new_key_type! {
    /// Stable handle to a registered shape. Keys from removed shapes stop
    /// resolving instead of dangling.
    pub struct ShapeKey;
}

/// Ordered collection of live shapes.
///
/// Shapes are owned by the registry. Insertion order matters only for
/// `remove_last`, which always pops the most recently added shape.
#[derive(Default)]
pub struct SceneRegistry {
    shapes: SlotMap<ShapeKey, Shape>,
    order: Vec<ShapeKey>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a shape and returns its stable key.
    pub fn add(&mut self, shape: Shape) -> ShapeKey {
        let key = self.shapes.insert(shape);
        self.order.push(key);
        key
    }

    /// Removes the most recently added shape. No-op on an empty registry.
    pub fn remove_last(&mut self) -> Option<ShapeKey> {
        let key = self.order.pop()?;
        self.shapes.remove(key);
        Some(key)
    }

    pub fn get(&self, key: ShapeKey) -> Option<&Shape> {
        self.shapes.get(key)
    }

    pub fn get_mut(&mut self, key: ShapeKey) -> Option<&mut Shape> {
        self.shapes.get_mut(key)
    }

    pub fn contains(&self, key: ShapeKey) -> bool {
        self.shapes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeKey, &Shape)> + '_ {
        self.order.iter().filter_map(|&key| self.shapes.get(key).map(|s| (key, s)))
    }
}
