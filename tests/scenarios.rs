use rand::rngs::StdRng;
use rand::SeedableRng;

use snek::autopilot::{self, DistanceMap, Route};
use snek::game::{
    Action, CollisionType, Direction, GameConfig, GameEngine, Grid, Input, Phase, Position, Snake,
    TickOutcome, TileCode,
};
use snek::input::InputQueue;

fn config(arena_size: usize) -> GameConfig {
    GameConfig {
        arena_size,
        seed: Some(42),
        ..GameConfig::default()
    }
}

fn snake_tiles(grid: &Grid) -> usize {
    grid.tiles().iter().filter(|tile| tile.is_snake()).count()
}

#[test]
fn test_straight_run_to_food() {
    let mut engine = GameEngine::with_layout(
        config(5),
        &[Position::new(2, 2)],
        Direction::Right,
        Position::new(4, 2),
    )
    .unwrap();
    let inputs = InputQueue::new();

    let plan = autopilot::plan(engine.grid(), engine.snake().head()).unwrap();
    assert_eq!(plan.action, Action::Move(Direction::Right));

    engine.step(&inputs).unwrap();
    assert_eq!(engine.snake().head(), Position::new(3, 2));
    assert_eq!(engine.snake().size(), 1);

    engine.step(&inputs).unwrap();
    assert_eq!(engine.snake().head(), Position::new(4, 2));
    assert_eq!(engine.snake().size(), 2);

    let food = engine.grid().food_pos();
    assert_ne!(food, Position::new(4, 2));
    assert!(!engine.grid().trail().contains(&food));
    assert_eq!(engine.grid().tile_at(food), TileCode::Food);
}

#[test]
fn test_sealed_food_leaves_snake_boxed_in() {
    // 15 of 16 cells taken; the free corner (3,3) touches only body segments
    let cells = [
        Position::new(0, 3),
        Position::new(1, 3),
        Position::new(2, 3),
        Position::new(2, 2),
        Position::new(3, 2),
        Position::new(3, 1),
        Position::new(3, 0),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(0, 2),
        Position::new(0, 1),
        Position::new(0, 0),
        Position::new(1, 0),
    ];
    let config = GameConfig {
        autopilot: true,
        ..config(4)
    };
    let mut engine =
        GameEngine::with_layout(config, &cells, Direction::Right, Position::new(3, 3)).unwrap();

    let map = DistanceMap::flood(engine.grid(), engine.snake().head());
    assert!(!map.reached_food());

    let inputs = InputQueue::new();
    assert_eq!(engine.step(&inputs).unwrap(), TickOutcome::Died);
    assert_eq!(engine.last_plan().map(|plan| plan.route), Some(Route::Boxed));
    assert_eq!(engine.collision(), Some(CollisionType::SelfCollision));
}

#[test]
fn test_reversal_is_ignored() {
    let mut engine = GameEngine::with_layout(
        config(5),
        &[Position::new(2, 1), Position::new(2, 2)],
        Direction::Up,
        Position::new(0, 0),
    )
    .unwrap();
    let inputs = InputQueue::new();
    inputs.push(Input::Turn(Direction::Down));

    engine.step(&inputs).unwrap();

    assert_eq!(engine.snake().direction(), Direction::Up);
    assert_eq!(engine.snake().head(), Position::new(2, 3));
    assert_eq!(engine.phase(), Phase::Running);
}

#[test]
fn test_chasing_the_tail() {
    // a 2x2 loop: the head keeps entering the cell its tail just left
    let cells = [
        Position::new(1, 1),
        Position::new(2, 1),
        Position::new(2, 2),
        Position::new(1, 2),
    ];
    let mut engine =
        GameEngine::with_layout(config(5), &cells, Direction::Down, Position::new(4, 4)).unwrap();
    let inputs = InputQueue::new();
    let turns = [Direction::Down, Direction::Right, Direction::Up, Direction::Left];

    for (i, turn) in turns.iter().cycle().take(12).enumerate() {
        let vacated = *engine.grid().trail().front().unwrap();
        inputs.push(Input::Turn(*turn));

        let outcome = engine.step(&inputs).unwrap();

        assert!(matches!(outcome, TickOutcome::Running { .. }), "tick {i}");
        assert_eq!(engine.snake().head(), vacated);
        assert_ne!(*engine.grid().trail().front().unwrap(), vacated);
        assert_eq!(snake_tiles(engine.grid()), 4);
    }
}

#[test]
fn test_invariants_hold_through_autopilot_rounds() {
    let mut longest = 1;

    for seed in 0..20 {
        let config = GameConfig {
            arena_size: 8,
            autopilot: true,
            seed: Some(seed),
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(config).unwrap();
        let inputs = InputQueue::new();
        let mut last_size = engine.snake().size();

        for _ in 0..2_000 {
            match engine.step(&inputs).unwrap() {
                TickOutcome::Running { .. } => {}
                TickOutcome::Died => break,
                other => panic!("unexpected {other:?}"),
            }

            let grid = engine.grid();
            let size = engine.snake().size();
            assert!(size >= last_size);
            last_size = size;

            assert_eq!(grid.trail().len(), size);
            assert_eq!(snake_tiles(grid), size);
            assert_eq!(grid.trail().back(), Some(&engine.snake().head()));

            let food = grid.food_pos();
            assert!(grid.contains(food));
            assert!(!grid.trail().contains(&food));
            assert_eq!(grid.tiles().iter().filter(|&&t| t == TileCode::Food).count(), 1);
        }

        longest = longest.max(last_size);
    }

    assert!(longest > 1, "autopilot never ate");
}

#[test]
fn test_rebuild_twice_is_stable() {
    let mut grid = Grid::new(6, StdRng::seed_from_u64(9));
    let mut snake = Snake::spawn(&mut grid, Position::new(3, 3), Direction::Left);
    snake.advance(&mut grid).unwrap();
    snake.advance(&mut grid).unwrap();

    let before = grid.tiles().to_vec();
    grid.rebuild();
    grid.rebuild();

    assert_eq!(grid.tiles(), before.as_slice());
}

#[test]
fn test_open_arena_flood_is_manhattan() {
    let size = 6;
    for (head, food) in [
        (Position::new(0, 0), Position::new(5, 5)),
        (Position::new(2, 3), Position::new(5, 0)),
        (Position::new(5, 1), Position::new(0, 4)),
    ] {
        let mut grid = Grid::new(size, StdRng::seed_from_u64(1));
        grid.set_food(food);
        Snake::lay(&mut grid, &[head], Direction::Up);

        let map = DistanceMap::flood(&grid, head);
        let reach = head.manhattan(food);

        assert_eq!(map.distance_to(food), Some(reach));
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                let pos = Position::new(x, y);
                let expected = head.manhattan(pos);
                if expected <= reach {
                    assert_eq!(map.distance_to(pos), Some(expected), "{head:?} -> {pos:?}");
                } else {
                    assert_eq!(map.distance_to(pos), None, "{head:?} -> {pos:?}");
                }
            }
        }
    }
}
