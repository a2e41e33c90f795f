use log::{debug, trace};

use super::distance::{CellState, DistanceMap};
use crate::game::{Action, Direction, GameError, Grid, Position};

/// How a plan was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Following the distance map to the food
    ToFood { distance: u32 },
    /// Food unreachable; first open neighbour of the head
    Fallback,
    /// Food unreachable and every neighbour blocked
    Boxed,
}

/// One tick's autopilot decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub action: Action,
    pub route: Route,
}

/// Choose the next move for a snake whose head is at `head`.
///
/// Only the first step of the route is returned; callers plan again next tick.
pub fn plan(grid: &Grid, head: Position) -> Result<Plan, GameError> {
    let map = DistanceMap::flood(grid, head);
    let food = grid.food_pos();

    let Some(distance) = map.distance_to(food) else {
        let plan = avoid_collision(&map, head);
        debug!("food at {:?} unreachable from {:?}, {:?}", food, head, plan.route);
        return Ok(plan);
    };

    let path = walk_back(&map, food, distance)?;
    trace!("path to {:?}: {:?}", food, path);
    let action = path.first().copied().map(Action::Move).unwrap_or(Action::Continue);
    Ok(Plan {
        action,
        route: Route::ToFood { distance },
    })
}

/// Follow strictly decreasing distances from the food back to the head and
/// return the forward path.
fn walk_back(
    map: &DistanceMap,
    food: Position,
    distance: u32,
) -> Result<Vec<Direction>, GameError> {
    // larger than any label the fill can produce
    let unreachable = (map.side() * map.side()) as u32 + 10;
    let mut backward = Vec::with_capacity(distance as usize);
    let mut cur = food;

    for _ in 0..distance {
        if map.distance_to(cur) == Some(0) {
            break;
        }

        let mut best: Option<(Direction, Position)> = None;
        let mut best_distance = unreachable;
        for (dir, next, state) in map.neighbours(cur) {
            if let CellState::Distance(d) = state {
                if d < best_distance {
                    best_distance = d;
                    best = Some((dir, next));
                }
            }
        }

        let (dir, next) = best.ok_or(GameError::BrokenPath(cur))?;
        backward.push(dir);
        cur = next;
    }

    Ok(backward.into_iter().rev().map(|dir| dir.opposite()).collect())
}

fn avoid_collision(map: &DistanceMap, head: Position) -> Plan {
    map.neighbours(head)
        .find(|&(_, _, state)| state != CellState::Blocked)
        .map(|(dir, _, _)| Plan {
            action: Action::Move(dir),
            route: Route::Fallback,
        })
        .unwrap_or(Plan {
            action: Action::Continue,
            route: Route::Boxed,
        })
}
