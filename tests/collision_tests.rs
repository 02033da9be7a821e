use glam::Vec3;
use shape_editor::collision::move_blocked;
use shape_editor::registry::SceneRegistry;
use shape_editor::{Direction, EditorState, MoveOutcome, Shape, ShapeKind};

fn cube(x: f32, y: f32, z: f32) -> Shape {
    Shape::new(ShapeKind::Cube, Vec3::new(x, y, z), [0.5, 0.5, 0.5])
}

#[test]
fn test_cubes_two_units_apart_allow_steps_between_them() {
    let mut registry = SceneRegistry::new();
    let mover = registry.add(cube(0.0, 0.5, 0.0));
    registry.add(cube(2.0, 0.5, 0.0));

    // Stepping through the gap: each candidate keeps at least a step of
    // anchor clearance until the boxes deeply overlap.
    assert!(!move_blocked(&registry, mover, Vec3::new(0.5, 0.5, 0.0)));
    assert!(!move_blocked(&registry, mover, Vec3::new(1.0, 0.5, 0.0)));
}

#[test]
fn test_close_overlap_blocks() {
    let mut registry = SceneRegistry::new();
    let mover = registry.add(cube(0.0, 0.5, 0.0));
    registry.add(cube(2.0, 0.5, 0.0));

    // Candidate center 0.3 from the other shape's anchor: the translated box
    // contains the anchor, so the distance is 0 and the move is rejected.
    assert!(move_blocked(&registry, mover, Vec3::new(1.7, 0.5, 0.0)));
}

#[test]
fn test_editor_move_respects_collision() {
    let mut editor = EditorState::new(1.0);
    let mover = editor.add_shape(ShapeKind::Cube);
    editor
        .registry
        .get_mut(mover)
        .unwrap()
        .position = Vec3::new(0.0, 0.5, 0.0);

    let other = editor.add_shape(ShapeKind::Cube);
    editor
        .registry
        .get_mut(other)
        .unwrap()
        .position = Vec3::new(1.0, 0.5, 0.0);

    editor.selection.select(mover);

    // The neighbor sits one unit to the right; stepping into it is blocked,
    // stepping away is not.
    assert_eq!(editor.move_selected(Direction::Right), MoveOutcome::Blocked);
    assert_eq!(
        editor.registry.get(mover).unwrap().position,
        Vec3::new(0.0, 0.5, 0.0)
    );
    assert_eq!(editor.move_selected(Direction::Left), MoveOutcome::Moved);
    assert_eq!(
        editor.registry.get(mover).unwrap().position,
        Vec3::new(-0.5, 0.5, 0.0)
    );
}

#[test]
fn test_all_directions_are_noops_without_selection() {
    let mut editor = EditorState::new(1.0);
    editor.add_shape(ShapeKind::Sphere);
    editor.selection.clear();

    let before: Vec<Vec3> = editor.registry.iter().map(|(_, s)| s.position).collect();

    for direction in Direction::ALL {
        assert_eq!(editor.move_selected(direction), MoveOutcome::NoSelection);
    }

    let after: Vec<Vec3> = editor.registry.iter().map(|(_, s)| s.position).collect();
    assert_eq!(before, after);
}

#[test]
fn test_empty_scene_always_approves() {
    let mut editor = EditorState::new(1.0);
    let key = editor.add_shape(ShapeKind::Cylinder);
    editor.selection.select(key);

    for direction in Direction::ALL {
        assert_eq!(editor.move_selected(direction), MoveOutcome::Moved);
    }
}
