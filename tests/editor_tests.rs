use shape_editor::{EditorError, EditorState, ShapeKind};

#[cfg(test)]
mod editor_tests {
    use super::*;

    #[test]
    fn test_registry_size_tracks_adds_and_removals() {
        let mut editor = EditorState::new(1.0);

        for _ in 0..5 {
            editor.add_shape(ShapeKind::Cube);
        }
        assert_eq!(editor.registry.len(), 5);

        editor.remove_last();
        editor.remove_last();
        assert_eq!(editor.registry.len(), 3);

        // Draining past empty never goes negative.
        for _ in 0..10 {
            editor.remove_last();
        }
        assert_eq!(editor.registry.len(), 0);
    }

    #[test]
    fn test_remove_last_on_empty_editor_is_noop() {
        let mut editor = EditorState::new(1.0);
        editor.remove_last();
        assert_eq!(editor.registry.len(), 0);
        assert_eq!(editor.status_line(), "Selected: none");
    }

    #[test]
    fn test_selection_does_not_survive_removal_of_its_shape() {
        let mut editor = EditorState::new(1.0);
        let a = editor.add_shape(ShapeKind::Cube);
        let b = editor.add_shape(ShapeKind::Sphere);

        editor.selection.select(a);
        editor.selection.select(b);

        // B was added last, so remove_last removes it; the selection must not
        // keep referencing the unregistered shape.
        editor.remove_last();
        assert!(editor.selection.resolve(&editor.registry).is_none());
        assert_eq!(editor.selection.key(), None);
    }

    #[test]
    fn test_status_line_reports_kind_label() {
        let mut editor = EditorState::new(1.0);
        editor.add_shape(ShapeKind::Cylinder);
        assert_eq!(editor.status_line(), "Selected: cylinder");
    }

    #[test]
    fn test_add_by_name_round_trip() {
        let mut editor = EditorState::new(1.0);
        for name in ["cube", "cylinder", "sphere"] {
            editor.add_shape_by_name(name).unwrap();
        }
        assert_eq!(editor.registry.len(), 3);

        let err = editor.add_shape_by_name("prism").unwrap_err();
        assert_eq!(err, EditorError::InvalidShapeKind("prism".to_string()));
        assert_eq!(editor.registry.len(), 3);
    }
}
