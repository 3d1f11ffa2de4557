//! Tests for malformed drawings

use asciigraf::{graph_from_ascii, EdgeFault, InvalidEdgeError, Position};

#[test]
fn test_missing_end_node() {
    let err = graph_from_ascii("1---").unwrap_err();

    assert!(matches!(err, InvalidEdgeError::TooFewNodes { .. }));
    assert_eq!(err.fault(), EdgeFault::TooFew);
    assert_eq!(err.position(), Position::new(3, 0));
    assert_eq!(err.neighbours(), &[Position::new(2, 0)]);
}

#[test]
fn test_too_many_neighbours() {
    let err = graph_from_ascii(
        "
               1---------------3
                       |
                       2         ",
    )
    .unwrap_err();

    assert!(matches!(err, InvalidEdgeError::TooManyNodes { .. }));
    assert_eq!(err.position(), Position::new(23, 1));
    assert_eq!(err.neighbours().len(), 3);
}

#[test]
fn test_error_message_contents() {
    let text = "
               1---------------3
                       |
                       2         ";
    let message = graph_from_ascii(text).unwrap_err().to_string();

    assert!(message.starts_with("Too many nodes"));
    assert!(message.contains("row 1, column 23"));
    assert!(message.contains(&format!("Network String:\n{text}")));
    assert!(message.contains("Affected Edge:\n"));
    assert!(message.contains("                      ^^^"));
}

#[test]
fn test_affected_edge_is_redrawn() {
    let err = graph_from_ascii(
        "
               1---------------3
                       |
                       2         ",
    )
    .unwrap_err();

    let InvalidEdgeError::TooManyNodes { affected, .. } = &err else {
        panic!("expected too many nodes, got {err:?}");
    };
    let expected = format!("\n{}---\n{}|", " ".repeat(22), " ".repeat(23));
    assert_eq!(affected, &expected);
}

#[test]
fn test_snippet_highlights_the_junction() {
    let err = graph_from_ascii("A\n\n1---\n\nB").unwrap_err();

    assert_eq!(err.snippet(), "   2 | \n   3 | 1---\n     |   ^^\n   4 | ");
}

#[test]
fn test_lone_glyph() {
    let err = graph_from_ascii("A   |   B").unwrap_err();

    assert_eq!(err.fault(), EdgeFault::TooFew);
    assert!(err.neighbours().is_empty());
}

#[test]
fn test_label_with_no_line_beyond_it() {
    // The `)` is never patched, so the line stops inside the label
    let err = graph_from_ascii("A---(label)").unwrap_err();
    assert_eq!(err.fault(), EdgeFault::TooFew);
    assert_eq!(err.position(), Position::new(9, 0));
}

#[test]
fn test_closed_loop() {
    let err = graph_from_ascii("A\n\n|-|\n|-|").unwrap_err();
    assert_eq!(err.fault(), EdgeFault::TooFew);
    assert_eq!(err.position(), Position::new(0, 2));
}
