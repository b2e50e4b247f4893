//! Solver lifecycle and step snapshots.

use serde::{Deserialize, Serialize};

/// Lifecycle of a step-wise solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverState {
    /// Constructed, no step taken yet.
    Created,
    /// At least one step taken, more remain.
    Solving,
    /// Finished; further steps are no-ops.
    Solved,
}

/// What a solver reports to an observer after one step.
///
/// For the nearest-neighbor solver `order` is the partial path built so far;
/// for the GA it is the best complete tour retained so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1-based step number.
    pub step: usize,
    /// Vertex indices in visiting order.
    pub order: Vec<usize>,
    /// Open-path length of `order`.
    pub weight: f64,
}
