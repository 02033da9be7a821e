use glam::Vec3;
use shape_editor::{EditorState, ShapeKind};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

#[test]
fn test_center_click_selects_shape_at_origin() {
    let mut editor = EditorState::new(WIDTH / HEIGHT);
    let key = editor.add_shape(ShapeKind::Cube);
    editor.selection.clear();

    // The camera looks at the origin, so a click in the middle of the
    // viewport must hit the cube spawned there.
    let hit = editor.pick_at(WIDTH / 2.0, HEIGHT / 2.0, WIDTH, HEIGHT);
    assert_eq!(hit, Some(key));
    assert_eq!(editor.selection.key(), Some(key));
}

#[test]
fn test_miss_leaves_selection_unchanged() {
    let mut editor = EditorState::new(WIDTH / HEIGHT);
    let key = editor.add_shape(ShapeKind::Sphere);

    // Clicking the very corner of the viewport sends the ray far from the
    // only shape; the existing selection stays put.
    let hit = editor.pick_at(1.0, 1.0, WIDTH, HEIGHT);
    assert_eq!(hit, None);
    assert_eq!(editor.selection.key(), Some(key));
}

#[test]
fn test_miss_on_empty_scene_is_harmless() {
    let mut editor = EditorState::new(WIDTH / HEIGHT);
    assert_eq!(editor.pick_at(10.0, 10.0, WIDTH, HEIGHT), None);
    assert_eq!(editor.status_line(), "Selected: none");
}

#[test]
fn test_pick_survives_stacked_shapes() {
    let mut editor = EditorState::new(WIDTH / HEIGHT);
    editor.add_shape(ShapeKind::Cube);
    editor.add_shape(ShapeKind::Cube);
    editor.selection.clear();

    // Both cubes straddle the view ray; some shape must be picked and the
    // pick must resolve to a live registry entry.
    let hit = editor.pick_at(WIDTH / 2.0, HEIGHT / 2.0, WIDTH, HEIGHT);
    let key = hit.expect("stacked cubes should be hit");
    assert!(editor.registry.get(key).is_some());
}

#[test]
fn test_selection_follows_latest_pick() {
    let mut editor = EditorState::new(WIDTH / HEIGHT);
    let first = editor.add_shape(ShapeKind::Cube);
    let key = editor.registry.iter().next().map(|(k, _)| k).unwrap();
    assert_eq!(first, key);

    // Move the cube well off to the side so a center click misses it, then
    // verify the selection still points at it afterwards.
    editor.registry.get_mut(first).unwrap().position = Vec3::new(50.0, 0.5, 0.0);
    editor.pick_at(WIDTH / 2.0, HEIGHT / 2.0, WIDTH, HEIGHT);
    assert_eq!(editor.selection.key(), Some(first));
}
