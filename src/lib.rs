//! # Kaiwa - Workflow Definition Compiler
//!
//! **Kaiwa** keeps the two representations of a voice-call conversational
//! workflow consistent: the canonical, serializable configuration document
//! consumed by the call-handling runtime, and the editable graph of nodes
//! and labeled edges an operator drags around on a canvas. It compiles
//! between the two without data loss, parses and builds the small
//! transition-condition language, reconciles edits made through either view
//! without echo loops, and validates the structural rules a deployable
//! workflow must satisfy.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Parse a `WorkflowConfig` JSON document and expand it into a
//!     `WorkflowGraph` with [`compiler::to_graph`].
//! 2.  **Edit**: Mutate the graph through the [`reconcile`] functions (or a
//!     [`reconcile::WorkflowEditor`] session); the reconciler keeps each
//!     node's cached transition list equal to its outgoing edges.
//! 3.  **Validate**: Run [`validate::validate`] on demand and before
//!     deployment; violations come back as data, never as panics.
//! 4.  **Save**: Collapse the graph back into a document with
//!     [`compiler::to_config`], passing the previously persisted config so
//!     workflow-level settings flow through untouched.
//!
//! Every function in the core is total and synchronous: malformed condition
//! strings degrade to `always`, unknown node types are preserved verbatim,
//! and structural problems are reported, not thrown.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaiwa::prelude::*;
//!
//! let json = r#"{
//!     "initial_node": "greet",
//!     "global_prompt": "You are a polite booking assistant.",
//!     "nodes": [
//!         {
//!             "id": "greet",
//!             "name": "Greeting",
//!             "type": "standard",
//!             "static_text": "Hello! How can I help?",
//!             "transitions": [
//!                 { "condition": "user_responded", "target": "wrap_up", "priority": 0 }
//!             ]
//!         },
//!         { "id": "wrap_up", "name": "Wrap up", "type": "end_call" }
//!     ]
//! }"#;
//!
//! let config = WorkflowConfig::from_json(json)?;
//!
//! // Expand the document into the editable graph view.
//! let mut graph = to_graph(&config);
//! assert_eq!(graph.edges.len(), 1);
//!
//! // The operator draws a connection; the reconciler updates the source
//! // node's cached transitions from the edge list.
//! connect(&mut graph, "greet", "wrap_up");
//! assert_eq!(graph.node("greet").unwrap().transitions.len(), 2);
//!
//! // Check the structural rules before deployment.
//! let report = validate(&graph);
//! assert!(report.is_valid());
//!
//! // Collapse back into the canonical document. Workflow-level settings
//! // pass through from the previous config unchanged.
//! let saved = to_config(&graph, Some(&config));
//! assert_eq!(saved.initial_node, "greet");
//! assert_eq!(
//!     saved.settings.global_prompt.as_deref(),
//!     Some("You are a polite booking assistant.")
//! );
//! # Ok::<(), kaiwa::error::WorkflowParseError>(())
//! ```

pub mod compiler;
pub mod condition;
pub mod config;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod reconcile;
pub mod validate;
