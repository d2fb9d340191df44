use crate::config::Position;
use serde::{Deserialize, Serialize};

use super::model::{GraphEdge, GraphNode};

/// Width of one cell of the deterministic fallback grid.
pub const GRID_CELL_WIDTH: f64 = 400.0;
/// Height of one cell of the deterministic fallback grid.
pub const GRID_CELL_HEIGHT: f64 = 300.0;

/// Options handed to an external layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub direction: LayoutDirection,
    pub node_width: f64,
    pub node_height: f64,
    pub spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::Horizontal,
            node_width: 320.0,
            node_height: 120.0,
            spacing: 80.0,
        }
    }
}

/// Flow direction for auto-layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    Horizontal,
    Vertical,
}

/// Contract for the external auto-layout collaborator.
///
/// The core does not depend on any particular placement algorithm, only on
/// the engine being a pure function returning one position per input node,
/// in input order.
pub trait LayoutEngine {
    fn layout(
        &self,
        nodes: &[GraphNode],
        edges: &[GraphEdge],
        options: &LayoutOptions,
    ) -> Vec<Position>;
}

/// Deterministic row-major grid placement used when a document carries no
/// saved positions: `columns = ceil(sqrt(node_count))`, fixed 400x300 cells.
/// Stable for a given input ordering, so repeated loads are reproducible.
pub fn grid_position(index: usize, node_count: usize) -> Position {
    let columns = ((node_count as f64).sqrt().ceil() as usize).max(1);
    let row = index / columns;
    let col = index % columns;
    Position::new(col as f64 * GRID_CELL_WIDTH, row as f64 * GRID_CELL_HEIGHT)
}

/// The fallback grid exposed as a `LayoutEngine`, for callers that want a
/// placement engine without wiring up an external algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayout;

impl LayoutEngine for GridLayout {
    fn layout(
        &self,
        nodes: &[GraphNode],
        _edges: &[GraphEdge],
        _options: &LayoutOptions,
    ) -> Vec<Position> {
        (0..nodes.len()).map(|i| grid_position(i, nodes.len())).collect()
    }
}
