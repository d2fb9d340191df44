//! The Graph↔Config compiler: `to_graph` expands the canonical document
//! into the editable view on load, `to_config` collapses it back on every
//! save or dirty-check. Both directions are total over well-typed input.

mod collapse;
mod expand;
mod settings;

pub use collapse::to_config;
pub use expand::to_graph;
pub use settings::{resolve_initial_node, resolve_settings};
