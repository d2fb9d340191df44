//! Common test utilities for building workflow documents and graphs.
use kaiwa::prelude::*;

/// Creates a config node with no transitions, actions, or metadata.
#[allow(dead_code)]
pub fn config_node(id: &str, name: &str, behavior: NodeBehavior) -> ConfigNode {
    ConfigNode {
        id: id.to_string(),
        name: name.to_string(),
        transitions: None,
        actions: None,
        metadata: None,
        behavior,
    }
}

/// Creates a graph node at the origin with an empty transition cache.
#[allow(dead_code)]
pub fn graph_node(id: &str, behavior: NodeBehavior) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        name: id.to_string(),
        position: Position::new(0.0, 0.0),
        transitions: Vec::new(),
        actions: None,
        behavior,
    }
}

/// A `standard` node body carrying only static text.
#[allow(dead_code)]
pub fn standard_text(text: &str) -> NodeBehavior {
    NodeBehavior::Known(NodeKind::Standard(StandardNode {
        static_text: Some(text.to_string()),
        system_prompt: None,
    }))
}

/// A `standard` node body carrying only a system prompt.
#[allow(dead_code)]
pub fn standard_prompt(prompt: &str) -> NodeBehavior {
    NodeBehavior::Known(NodeKind::Standard(StandardNode {
        static_text: None,
        system_prompt: Some(prompt.to_string()),
    }))
}

/// Creates a complete three-node booking workflow:
/// greet (standard) -> collect (retrieve_variable) -> done (end_call),
/// with a saved canvas position on `greet` and workflow-level settings the
/// compiler must pass through untouched.
#[allow(dead_code)]
pub fn booking_config() -> WorkflowConfig {
    let mut extra = serde_json::Map::new();
    extra.insert(
        "model_defaults".to_string(),
        serde_json::json!({ "provider": "acme", "temperature": 0.2 }),
    );

    WorkflowConfig {
        initial_node: "greet".to_string(),
        nodes: vec![
            ConfigNode {
                id: "greet".to_string(),
                name: "Greeting".to_string(),
                transitions: Some(vec![
                    Transition::new("user_responded", "collect", 0),
                    Transition::new("timeout:10s", "greet", 1),
                ]),
                actions: None,
                metadata: Some(NodeMetadata {
                    position: Some(Position::new(120.0, 240.0)),
                }),
                behavior: standard_text("Hello! What would you like to book?"),
            },
            ConfigNode {
                id: "collect".to_string(),
                name: "Collect date".to_string(),
                transitions: Some(vec![
                    Transition::new("variables_extracted:date", "done", 0),
                    Transition::new("extraction_failed:date", "greet", 1),
                ]),
                actions: None,
                metadata: None,
                behavior: NodeBehavior::Known(NodeKind::RetrieveVariable(RetrieveVariableNode {
                    variables: Some(vec![VariableSpec {
                        variable_name: "date".to_string(),
                        extraction_prompt: "Which date does the caller want?".to_string(),
                        default_value: None,
                    }]),
                    variable_name: None,
                    extraction_prompt: None,
                })),
            },
            ConfigNode {
                id: "done".to_string(),
                name: "Wrap up".to_string(),
                transitions: None,
                actions: None,
                metadata: None,
                behavior: NodeBehavior::end_call(),
            },
        ],
        settings: WorkflowSettings {
            global_prompt: Some("You are a polite booking assistant.".to_string()),
            history_window: Some(6),
            interruption_policy: None,
            tts: Some(serde_json::json!({ "voice": "amber" })),
            llm: None,
            global_intents: None,
            post_call_analysis: None,
            recording: None,
            extra,
        },
    }
}

/// A minimal valid graph: one standard node wired to one terminal node.
#[allow(dead_code)]
pub fn simple_graph() -> WorkflowGraph {
    let mut graph = WorkflowGraph {
        nodes: vec![
            graph_node("ask", standard_text("How can I help?")),
            graph_node("bye", NodeBehavior::end_call()),
        ],
        edges: Vec::new(),
    };
    connect(&mut graph, "ask", "bye");
    graph
}
