//! Flood-fill autopilot
//!
//! Labels every reachable cell with its distance from the snake's head, walks
//! back from the food along decreasing distances and returns the first step.
//! When the food cannot be reached it falls back to the first open neighbour
//! of the head. The plan is recomputed every tick.

pub mod distance;
pub mod planner;

pub use distance::{CellState, DistanceMap};
pub use planner::{plan, Plan, Route};
