//! Tests for the graph/config compiler: expansion, collapse, round trips.
mod common;
use common::*;
use kaiwa::prelude::*;

#[test]
fn test_to_graph_expands_nodes_and_edges_in_order() {
    let config = booking_config();
    let graph = to_graph(&config);

    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 4);

    let greet_edges: Vec<_> = graph.edges_from("greet").collect();
    assert_eq!(greet_edges.len(), 2);
    assert_eq!(greet_edges[0].id, "greet-collect-0");
    assert_eq!(greet_edges[0].label, "user_responded");
    assert_eq!(greet_edges[1].id, "greet-greet-1");
    assert_eq!(greet_edges[1].data.priority, 1);

    // The cached projection mirrors the document's transition order
    let greet = graph.node("greet").expect("greet should exist");
    assert_eq!(greet.transitions.len(), 2);
    assert_eq!(greet.transitions[0].target, "collect");
}

#[test]
fn test_to_graph_uses_saved_position_verbatim() {
    let config = booking_config();
    let graph = to_graph(&config);
    let greet = graph.node("greet").unwrap();
    assert_eq!(greet.position, Position::new(120.0, 240.0));
}

#[test]
fn test_to_graph_grid_fallback_is_deterministic() {
    let mut config = booking_config();
    for node in &mut config.nodes {
        node.metadata = None;
    }

    let first = to_graph(&config);
    let second = to_graph(&config);
    for (a, b) in first.nodes.iter().zip(&second.nodes) {
        assert_eq!(a.position, b.position);
    }

    // Three nodes: columns = ceil(sqrt(3)) = 2, row-major 400x300 cells
    assert_eq!(first.nodes[0].position, Position::new(0.0, 0.0));
    assert_eq!(first.nodes[1].position, Position::new(400.0, 0.0));
    assert_eq!(first.nodes[2].position, Position::new(0.0, 300.0));
}

#[test]
fn test_parallel_edges_get_distinct_ordinals() {
    let mut config = booking_config();
    config.nodes[0].transitions = Some(vec![
        Transition::new("contains:yes", "collect", 0),
        Transition::new("contains:maybe", "collect", 1),
    ]);

    let graph = to_graph(&config);
    let ids: Vec<_> = graph.edges_from("greet").map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec!["greet-collect-0", "greet-collect-1"]);
}

#[test]
fn test_config_graph_config_identity() {
    let config = booking_config();
    let graph = to_graph(&config);
    let saved = to_config(&graph, Some(&config));

    assert_eq!(saved.initial_node, config.initial_node);
    assert_eq!(saved.nodes.len(), config.nodes.len());
    for (original, round_tripped) in config.nodes.iter().zip(&saved.nodes) {
        assert_eq!(original.id, round_tripped.id);
        assert_eq!(original.name, round_tripped.name);
        assert_eq!(original.behavior, round_tripped.behavior);
        assert_eq!(original.transitions, round_tripped.transitions);
    }
}

#[test]
fn test_settings_pass_through_unchanged() {
    let config = booking_config();
    let graph = to_graph(&config);
    let saved = to_config(&graph, Some(&config));

    assert_eq!(saved.settings, config.settings);

    // Absence in the previous config means absence in the output
    assert!(saved.settings.llm.is_none());
    assert_eq!(
        saved.settings.extra["model_defaults"]["provider"],
        serde_json::json!("acme")
    );
}

#[test]
fn test_settings_default_empty_without_previous_config() {
    let graph = to_graph(&booking_config());
    let saved = to_config(&graph, None);
    assert_eq!(saved.settings, WorkflowSettings::default());
}

#[test]
fn test_initial_node_resolution_order() {
    let config = booking_config();
    let graph = to_graph(&config);

    // Previous config wins
    assert_eq!(to_config(&graph, Some(&config)).initial_node, "greet");

    // Without one, the first node's id
    assert_eq!(to_config(&graph, None).initial_node, "greet");

    // An empty graph falls back to the fixed literal
    let empty = WorkflowGraph::new();
    assert_eq!(to_config(&empty, None).initial_node, DEFAULT_INITIAL_NODE);
}

#[test]
fn test_end_call_emits_no_transitions_or_actions() {
    let config = booking_config();
    let mut graph = to_graph(&config);

    // Scratch state: the operator draws an edge out of the terminal node
    connect(&mut graph, "done", "greet");
    graph.node_mut("done").unwrap().actions = Some(NodeActions {
        on_entry: Some(serde_json::json!(["log"])),
        on_exit: None,
    });

    let saved = to_config(&graph, Some(&config));
    let done = saved.node("done").expect("done should survive");
    assert!(done.transitions.is_none());
    assert!(done.actions.is_none());
    assert_eq!(done.behavior, NodeBehavior::end_call());
}

#[test]
fn test_unknown_node_type_round_trips_verbatim() {
    let json = r#"{
        "initial_node": "mystery",
        "nodes": [
            {
                "id": "mystery",
                "name": "Mystery",
                "type": "hologram",
                "shimmer": 3,
                "transitions": [
                    { "condition": "always", "target": "mystery", "priority": 0 }
                ]
            }
        ]
    }"#;
    let config = WorkflowConfig::from_json(json).expect("unknown types must not fail parsing");

    let graph = to_graph(&config);
    let node = graph.node("mystery").unwrap();

    // Visual dispatch degrades to standard; the persisted type does not
    assert_eq!(node.visual(), NodeVisual::Standard);
    assert_eq!(node.behavior.type_name(), "hologram");
    assert_eq!(graph.edges.len(), 1);

    let saved = to_config(&graph, Some(&config));
    let value = serde_json::to_value(&saved).unwrap();
    assert_eq!(value["nodes"][0]["type"], "hologram");
    assert_eq!(value["nodes"][0]["shimmer"], 3);
}

#[test]
fn test_document_json_round_trip() {
    let config = booking_config();
    let json = config.to_json().expect("serialization should succeed");
    let reloaded = WorkflowConfig::from_json(&json).expect("reload should succeed");
    assert_eq!(reloaded, config);
}

#[test]
fn test_from_json_reports_parse_errors() {
    let result = WorkflowConfig::from_json("{ not json");
    match result {
        Err(WorkflowParseError::Json(message)) => assert!(!message.is_empty()),
        other => panic!("Expected a Json parse error, got {:?}", other),
    }
}

#[test]
fn test_edge_summary_uses_display_names() {
    let config = booking_config();
    let graph = to_graph(&config);
    let edge = graph.edge("greet-greet-1").unwrap();
    let summary = edge.summary(|id| graph.node(id).map(|n| n.name.clone()));
    assert_eq!(summary, "timeout 10 -> Greeting");
}

#[test]
fn test_grid_layout_engine_matches_fallback() {
    let mut config = booking_config();
    for node in &mut config.nodes {
        node.metadata = None;
    }
    let graph = to_graph(&config);

    let engine = GridLayout;
    let positions = engine.layout(&graph.nodes, &graph.edges, &LayoutOptions::default());
    assert_eq!(positions.len(), graph.nodes.len());
    for (node, position) in graph.nodes.iter().zip(positions) {
        assert_eq!(node.position, position);
    }
}
