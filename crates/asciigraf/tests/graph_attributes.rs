//! Tests for node and edge attributes, and their serialized field names

use asciigraf::{graph_from_ascii, Position};

fn points(graph: &asciigraf::AsciiGraph, a: &str, b: &str) -> Vec<(i64, i64)> {
    graph
        .edge(a, b)
        .unwrap()
        .points
        .iter()
        .map(|&p| p.into())
        .collect()
}

#[test]
fn test_node_position_attributes() {
    let graph = graph_from_ascii(
        "

        n0-------------n1----------n2
                       |
                       |
                       |
                       n4
    ",
    )
    .unwrap();

    let positions: Vec<(&str, (i64, i64))> = graph
        .nodes()
        .map(|node| (node.name.as_str(), node.position.into()))
        .collect();
    assert_eq!(
        positions,
        [
            ("n0", (8, 2)),
            ("n1", (23, 2)),
            ("n2", (35, 2)),
            ("n4", (23, 6)),
        ]
    );
}

#[test]
fn test_line_positions() {
    let graph = graph_from_ascii(
        "

        n1------
               |
               |
               |
               n2 ",
    )
    .unwrap();

    assert_eq!(
        points(&graph, "n1", "n2"),
        [
            (10, 2),
            (11, 2),
            (12, 2),
            (13, 2),
            (14, 2),
            (15, 2),
            (15, 3),
            (15, 4),
            (15, 5),
        ]
    );
}

#[test]
fn test_line_positions_when_order_is_reversed() {
    let graph = graph_from_ascii(
        "

               -----
               |   |
               n2  n1",
    )
    .unwrap();

    let edge = graph.edge("n1", "n2").unwrap();
    assert_eq!((edge.source.as_str(), edge.target.as_str()), ("n2", "n1"));
    assert_eq!(
        points(&graph, "n2", "n1"),
        [(15, 3), (15, 2), (16, 2), (17, 2), (18, 2), (19, 2), (19, 3)]
    );
}

#[test]
fn test_line_positions_with_horizontal_label() {
    let graph = graph_from_ascii("  n1---(label)--n2  ").unwrap();

    let expected: Vec<(i64, i64)> = (4..=15).map(|x| (x, 0)).collect();
    assert_eq!(points(&graph, "n1", "n2"), expected);
}

#[test]
fn test_line_positions_with_vertical_label() {
    let graph = graph_from_ascii(
        "

            n1
            |
         (label)
            |
           n2

    ",
    )
    .unwrap();

    assert_eq!(points(&graph, "n1", "n2"), [(12, 3), (12, 4), (12, 5)]);
}

#[test]
fn test_length_matches_points() {
    let graph = graph_from_ascii("A---(lbl)---B\n|\nC").unwrap();
    for edge in graph.edges() {
        assert_eq!(edge.length, edge.points.len());
    }
}

#[test]
fn test_serialized_field_names() {
    let graph = graph_from_ascii("A---(x)---B\n\nC---D").unwrap();
    let value = serde_json::to_value(&graph).unwrap();

    assert_eq!(value["nodes"][0]["name"], "A");
    assert_eq!(value["nodes"][0]["position"]["x"], 0);
    assert_eq!(value["nodes"][0]["position"]["y"], 0);

    let labelled = &value["edges"][0];
    assert_eq!(labelled["length"], 9);
    assert_eq!(labelled["label"], "x");
    assert_eq!(labelled["points"][0]["x"], 1);

    // Absent labels are left out rather than written as null
    let plain = value["edges"][1].as_object().unwrap();
    assert!(!plain.contains_key("label"));
    assert_eq!(plain["length"], 3);
}

#[test]
fn test_position_of_missing_node() {
    let graph = graph_from_ascii("A").unwrap();
    assert_eq!(graph.position("A"), Some(Position::new(0, 0)));
    assert_eq!(graph.position("B"), None);
}
