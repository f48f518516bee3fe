use pretty_assertions::assert_eq;
use text_buffer::{DEFAULT_HISTORY_LIMIT, TextBuffer, TextBufferOptions};

fn four_lines() -> TextBuffer {
    TextBuffer::new("line_1\nline_2\nline_3\nline_4\n")
}

#[test]
fn test_undo_redo_delete() {
    let mut buffer = four_lines();
    buffer.delete(1, 2).unwrap();
    assert_eq!(buffer.dump(false), "line_1\nline_4\n");
    assert!(buffer.can_undo());
    assert!(!buffer.can_redo());

    assert!(buffer.undo());
    assert_eq!(buffer.dump(false), "line_1\nline_2\nline_3\nline_4\n");
    assert_eq!(buffer.line_count(), 4);
    assert!(!buffer.can_undo());
    assert!(buffer.can_redo());

    assert!(buffer.redo());
    assert_eq!(buffer.dump(false), "line_1\nline_4\n");
    assert_eq!(buffer.line_count(), 2);
    assert!(buffer.can_undo());
    assert!(!buffer.can_redo());
}

#[test]
fn test_undo_restores_every_structural_edit() {
    let original = "line_1\nline_2\nline_3\nline_4\n";

    let mut buffer = four_lines();
    buffer.merge(2, TextBuffer::new("x\n")).unwrap();
    assert!(buffer.undo());
    assert_eq!(buffer.dump(false), original);

    let mut buffer = four_lines();
    buffer.paste(0, &TextBuffer::new("x\ny\n")).unwrap();
    assert!(buffer.undo());
    assert_eq!(buffer.dump(false), original);

    let mut buffer = four_lines();
    let _clip = buffer.cut(0, 2).unwrap();
    assert!(buffer.undo());
    assert_eq!(buffer.dump(false), original);
    assert_eq!(buffer.line_count(), 4);
}

#[test]
fn test_undo_on_fresh_buffer_is_noop() {
    let mut buffer = four_lines();
    assert!(!buffer.undo());
    assert!(!buffer.redo());
    assert_eq!(buffer.line_count(), 4);
}

#[test]
fn test_new_edit_clears_redo() {
    let mut buffer = four_lines();
    buffer.delete(0, 0).unwrap();
    buffer.undo();
    assert_eq!(buffer.redo_depth(), 1);

    buffer.delete(3, 3).unwrap();
    assert_eq!(buffer.redo_depth(), 0);
    assert!(!buffer.redo());
    assert_eq!(buffer.dump(false), "line_1\nline_2\nline_3\n");
}

#[test]
fn test_history_is_bounded() {
    let mut buffer = TextBuffer::new(&"x\n".repeat(20));
    for _ in 0..15 {
        buffer.delete(0, 0).unwrap();
    }
    assert_eq!(buffer.line_count(), 5);
    assert_eq!(buffer.undo_depth(), DEFAULT_HISTORY_LIMIT);

    let mut undone = 0;
    for _ in 0..15 {
        if buffer.undo() {
            undone += 1;
        }
    }
    assert_eq!(undone, 10);
    // Only the ten most recent states are recoverable.
    assert_eq!(buffer.line_count(), 15);
    assert!(!buffer.undo());

    for _ in 0..10 {
        assert!(buffer.redo());
    }
    assert_eq!(buffer.line_count(), 5);
    assert!(!buffer.redo());
}

#[test]
fn test_custom_history_limit() {
    let options = TextBufferOptions { history_limit: 2 };
    let mut buffer = TextBuffer::with_options("a\nb\nc\nd\n", options);
    buffer.delete(0, 0).unwrap();
    buffer.delete(0, 0).unwrap();
    buffer.delete(0, 0).unwrap();
    assert_eq!(buffer.undo_depth(), 2);
    while buffer.undo() {}
    assert_eq!(buffer.dump(false), "b\nc\nd\n");
}

#[test]
fn test_zero_history_limit_disables_undo() {
    let options = TextBufferOptions { history_limit: 0 };
    let mut buffer = TextBuffer::with_options("a\nb\n", options);
    buffer.delete(0, 0).unwrap();
    assert!(!buffer.can_undo());
    assert!(!buffer.undo());
    assert_eq!(buffer.dump(false), "b\n");
}

#[test]
fn test_add_prefix_discards_all_history() {
    let mut buffer = four_lines();
    buffer.delete(0, 0).unwrap();
    buffer.delete(0, 0).unwrap();
    buffer.undo();
    assert!(buffer.can_undo());
    assert!(buffer.can_redo());

    buffer.add_prefix(0, 0, "> ").unwrap();
    assert!(!buffer.can_undo());
    assert!(!buffer.can_redo());
    assert!(!buffer.undo());
    assert_eq!(buffer.dump(false), "> line_2\nline_3\nline_4\n");
}

#[test]
fn test_format_rich_text_clears_redo_only() {
    let mut buffer = TextBuffer::new("*a*\n_b_\n");
    buffer.delete(1, 1).unwrap();
    buffer.paste(1, &TextBuffer::new("_c_\n")).unwrap();
    buffer.undo();
    assert_eq!(buffer.undo_depth(), 1);
    assert_eq!(buffer.redo_depth(), 1);

    buffer.format_rich_text();
    assert_eq!(buffer.dump(false), "<b>a</b>\n");
    assert_eq!(buffer.undo_depth(), 1);
    assert_eq!(buffer.redo_depth(), 0);

    // No checkpoint was recorded for the formatting itself: undo jumps back
    // past it to the state before the delete.
    assert!(buffer.undo());
    assert_eq!(buffer.dump(false), "*a*\n_b_\n");
}

#[test]
fn test_merge_empty_source_still_checkpoints() {
    let mut buffer = four_lines();
    buffer.merge(4, TextBuffer::empty()).unwrap();
    assert_eq!(buffer.undo_depth(), 1);
    assert!(buffer.undo());
    assert_eq!(buffer.line_count(), 4);
}

#[test]
fn test_snapshots_are_independent_of_pasted_source() {
    let src = TextBuffer::new("s\n");
    let mut buffer = TextBuffer::new("a\n");
    buffer.paste(1, &src).unwrap();
    buffer.paste(1, &src).unwrap();
    assert_eq!(buffer.dump(false), "a\ns\ns\n");
    drop(src);

    assert!(buffer.undo());
    assert_eq!(buffer.dump(false), "a\ns\n");
    assert!(buffer.undo());
    assert_eq!(buffer.dump(false), "a\n");
    assert!(buffer.redo());
    assert!(buffer.redo());
    assert_eq!(buffer.dump(false), "a\ns\ns\n");
}

#[test]
fn test_state_tracks_history() {
    let mut buffer = four_lines();
    buffer.delete(0, 1).unwrap();
    buffer.undo();
    let state = buffer.state();
    assert_eq!(state.line_count, 4);
    assert_eq!(state.byte_count, 24);
    assert_eq!(state.history.undo_depth, 0);
    assert_eq!(state.history.redo_depth, 1);
    assert!(state.history.can_redo());
    assert!(!state.history.can_undo());
}

#[test]
fn test_clone_copies_history() {
    let mut buffer = four_lines();
    buffer.delete(0, 0).unwrap();
    let mut copy = buffer.clone();
    assert!(copy.undo());
    assert_eq!(copy.line_count(), 4);
    assert_eq!(buffer.line_count(), 3);
    assert!(buffer.can_undo());
}
