//! Snek - terminal snake with a flood-fill autopilot
//!
//! This library provides:
//! - Core game logic: arena, snake and tick controller (game module)
//! - Distance-map autopilot (autopilot module)
//! - Keyboard mapping and the shared input queue (input module)
//! - TUI rendering (render module)
//! - Tick timing (metrics module)
//! - The interactive session loop (modes module)

pub mod autopilot;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
