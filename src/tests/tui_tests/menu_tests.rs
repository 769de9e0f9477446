// Menu Tests - Testing menu transitions and surface rendering

use crate::tui::{
    activate, dispatch, move_down, move_up, render, MenuInput, MenuModel, MenuNode,
    SelectionState,
};

fn sample_model() -> MenuModel {
    MenuModel::new(["A", "B", "C", "D", "E"])
}

#[test]
fn test_render_highlights_exactly_cursor() {
    let model = sample_model();
    for cursor in 0..model.len() {
        let mut nodes: Vec<MenuNode> = Vec::new();
        render(&model, Some(cursor), &mut nodes);

        assert_eq!(nodes.len(), model.len());
        let highlighted: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.highlighted)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(highlighted, vec![cursor], "Only the cursor node should be highlighted");
    }
}

#[test]
fn test_render_keeps_label_order() {
    let model = sample_model();
    let mut nodes: Vec<MenuNode> = Vec::new();
    render(&model, Some(0), &mut nodes);

    let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_render_clears_previous_nodes() {
    let model = MenuModel::new(["A", "B"]);
    let mut nodes = vec![MenuNode {
        label: "stale".to_string(),
        highlighted: true,
    }];
    render(&model, Some(1), &mut nodes);

    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(|n| n.label != "stale"));
    assert!(!nodes[0].highlighted);
    assert!(nodes[1].highlighted);
}

#[test]
fn test_render_empty_model() {
    let model = MenuModel::default();
    let mut nodes: Vec<MenuNode> = Vec::new();
    render(&model, None, &mut nodes);

    assert!(nodes.is_empty());
    assert!(!nodes.iter().any(|n| n.highlighted));
}

#[test]
fn test_move_down_steps_and_clamps() {
    let n = 5;
    for c in 0..n - 1 {
        assert_eq!(move_down(c, n), c + 1);
    }
    assert_eq!(move_down(n - 1, n), n - 1, "Should stay on last item");
    assert_eq!(move_down(move_down(n - 1, n), n), n - 1);
}

#[test]
fn test_move_up_steps_and_clamps() {
    let n = 5;
    for c in 1..n {
        assert_eq!(move_up(c, n), c - 1);
    }
    assert_eq!(move_up(0, n), 0, "Should stay on first item");
}

#[test]
fn test_move_down_reaches_end_after_n_minus_one_steps() {
    let n = 6;
    let mut cursor = 0;
    for step in 1..n {
        cursor = move_down(cursor, n);
        assert_eq!(cursor, step);
    }
    assert_eq!(cursor, n - 1);

    for _ in 0..10 {
        cursor = move_down(cursor, n);
        assert!(cursor < n);
    }
    assert_eq!(cursor, n - 1);
}

#[test]
fn test_moves_on_single_item_list() {
    assert_eq!(move_up(0, 1), 0);
    assert_eq!(move_down(0, 1), 0);
}

#[test]
fn test_moves_on_empty_list_are_noops() {
    assert_eq!(move_up(0, 0), 0);
    assert_eq!(move_down(0, 0), 0);
}

#[test]
fn test_activate_returns_label_at_cursor() {
    let model = MenuModel::new(["A", "B", "C"]);
    assert_eq!(activate(&model, Some(1)), Some("B"));
    assert_eq!(activate(&model, Some(0)), Some("A"));
    assert_eq!(activate(&model, Some(2)), Some("C"));
}

#[test]
fn test_activate_empty_model_yields_nothing() {
    let model = MenuModel::default();
    assert_eq!(activate(&model, None), None);
}

#[test]
fn test_dispatch_down_then_up() {
    let model = sample_model();
    let state = SelectionState::new(&model);

    let out = dispatch(state, &model, MenuInput::Down);
    assert_eq!(out.state.cursor, Some(1));
    assert!(out.redraw);
    assert!(out.activated.is_none());
    assert!(!out.quit);

    let out = dispatch(out.state, &model, MenuInput::Up);
    assert_eq!(out.state.cursor, Some(0));
    assert!(out.redraw);
}

#[test]
fn test_dispatch_activate_does_not_redraw() {
    let model = sample_model();
    let state = SelectionState { cursor: Some(3) };

    let out = dispatch(state, &model, MenuInput::Activate);
    assert_eq!(out.state, state, "Activation must not move the cursor");
    assert_eq!(out.activated.as_deref(), Some("D"));
    assert!(!out.redraw);
}

#[test]
fn test_dispatch_quit_leaves_state() {
    let model = sample_model();
    let state = SelectionState { cursor: Some(2) };

    let out = dispatch(state, &model, MenuInput::Quit);
    assert_eq!(out.state, state);
    assert!(out.quit);
    assert!(out.activated.is_none());
}

#[test]
fn test_dispatch_on_empty_model() {
    let model = MenuModel::default();
    let state = SelectionState::new(&model);

    for input in [MenuInput::Up, MenuInput::Down, MenuInput::Activate] {
        let out = dispatch(state, &model, input);
        assert_eq!(out.state.cursor, None);
        assert!(out.activated.is_none());
    }
}
