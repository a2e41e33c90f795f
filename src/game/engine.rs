use std::time::{Duration, Instant};

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{
    action::{Action, Direction, Input},
    config::GameConfig,
    error::GameError,
    grid::Grid,
    snake::{Advance, Snake},
    state::{CollisionType, Phase, Position},
};
use crate::autopilot::{self, Plan};
use crate::input::InputQueue;

/// Tick interval while time-warp is on
pub const TIME_WARP_INTERVAL: Duration = Duration::from_millis(1);

/// Session toggles flipped by dedicated keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub debug: bool,
    pub autopilot: bool,
    pub time_warp: bool,
}

/// Final numbers of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Snake size at death
    pub score: usize,
    /// Time from start to death
    pub elapsed: Duration,
    /// The snake filled the whole arena
    pub won: bool,
}

/// What the scheduler should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Render, then tick again after `interval`
    Running { interval: Duration },
    /// The round just ended; the next tick reports the summary
    Died,
    /// Stop ticking and show the summary
    GameOver(Summary),
    /// Leave the program
    Exit,
}

/// The tick controller: owns the arena and the snake for one round
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    phase: Phase,
    flags: Flags,
    collision: Option<CollisionType>,
    won: bool,
    last_plan: Option<Plan>,
    ticks: u64,
    started_at: Instant,
    died_at: Option<Instant>,
}

impl GameEngine {
    /// Start a round with a one-cell snake in the middle of the arena, facing up
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut grid = Grid::new(config.arena_size, Self::rng(&config));
        let mid = (config.arena_size / 2) as i32;
        let snake = Snake::spawn(&mut grid, Position::new(mid, mid), Direction::Up);
        Ok(Self::assemble(config, grid, snake))
    }

    /// Start a round from a prepared body (tail first) and food position
    pub fn with_layout(
        config: GameConfig,
        cells: &[Position],
        direction: Direction,
        food: Position,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if cells.is_empty() {
            return Err(GameError::EmptyLayout);
        }
        let n = config.arena_size as i32;
        let inside = |pos: Position| (0..n).contains(&pos.x) && (0..n).contains(&pos.y);
        if let Some(&pos) = cells.iter().chain([&food]).find(|&&pos| !inside(pos)) {
            return Err(GameError::OutsideArena(pos));
        }
        if cells.contains(&food) {
            return Err(GameError::FoodOnSnake(food));
        }

        let mut grid = Grid::new(config.arena_size, Self::rng(&config));
        grid.set_food(food);
        let snake = Snake::lay(&mut grid, cells, direction);
        Ok(Self::assemble(config, grid, snake))
    }

    fn rng(config: &GameConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn assemble(config: GameConfig, grid: Grid, snake: Snake) -> Self {
        info!(
            "new round: arena {}x{}, autopilot {}",
            config.arena_size, config.arena_size, config.autopilot
        );
        Self {
            flags: Flags {
                autopilot: config.autopilot,
                ..Flags::default()
            },
            config,
            grid,
            snake,
            phase: Phase::Running,
            collision: None,
            won: false,
            last_plan: None,
            ticks: 0,
            started_at: Instant::now(),
            died_at: None,
        }
    }

    /// Run one tick: autopilot, one queued command, one move.
    pub fn step(&mut self, inputs: &InputQueue) -> Result<TickOutcome, GameError> {
        if self.phase == Phase::Dead {
            return Ok(TickOutcome::GameOver(self.summary()));
        }
        self.ticks += 1;

        if self.flags.autopilot && inputs.is_empty() {
            let plan = autopilot::plan(&self.grid, self.snake.head())?;
            if let Action::Move(direction) = plan.action {
                inputs.push_if_empty(Input::Turn(direction));
            }
            self.last_plan = Some(plan);
        }

        if let Some(input) = inputs.pop() {
            if let Some(outcome) = self.apply(input) {
                return Ok(outcome);
            }
        }

        match self.snake.advance(&mut self.grid)? {
            Advance::Moved | Advance::Ate => {}
            Advance::Filled => {
                self.won = true;
                self.die();
                return Ok(TickOutcome::Died);
            }
            Advance::Died(collision) => {
                self.collision = Some(collision);
                self.die();
                return Ok(TickOutcome::Died);
            }
        }

        trace!(
            "tick {}: head {:?} size {}",
            self.ticks,
            self.snake.head(),
            self.snake.size()
        );
        Ok(TickOutcome::Running {
            interval: self.tick_interval(),
        })
    }

    fn apply(&mut self, input: Input) -> Option<TickOutcome> {
        match input {
            Input::Turn(direction) => {
                if !self.snake.steer(direction) {
                    trace!("rejected reversal to {:?}", direction);
                }
            }
            Input::ToggleDebug => {
                self.flags.debug = !self.flags.debug;
                debug!("debug {}", self.flags.debug);
            }
            Input::ToggleAutopilot => {
                self.flags.autopilot = !self.flags.autopilot;
                if !self.flags.autopilot {
                    self.last_plan = None;
                }
                debug!("autopilot {}", self.flags.autopilot);
            }
            Input::ToggleTimeWarp => {
                self.flags.time_warp = !self.flags.time_warp;
                debug!("time warp {}", self.flags.time_warp);
            }
            Input::Kill => {
                self.die();
                return Some(TickOutcome::Died);
            }
            Input::Exit => return Some(TickOutcome::Exit),
        }
        None
    }

    fn die(&mut self) {
        self.phase = Phase::Dead;
        self.died_at = Some(Instant::now());
        info!(
            "round over after {} ticks: size {}, {:?}{}",
            self.ticks,
            self.snake.size(),
            self.collision,
            if self.won { ", arena filled" } else { "" }
        );
    }

    /// Delay before the next tick. Speeds up as the snake grows.
    pub fn tick_interval(&self) -> Duration {
        if self.flags.time_warp {
            return TIME_WARP_INTERVAL;
        }
        let mut fps = self.config.base_fps;
        if self.config.speed_ramp {
            fps += 0.5 * ((self.snake.size() - 1) as f64).sqrt();
        }
        Duration::from_secs_f64(1.0 / fps)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            score: self.snake.size(),
            elapsed: self.elapsed(),
            won: self.won,
        }
    }

    /// Time since the round started, frozen at death
    pub fn elapsed(&self) -> Duration {
        match self.died_at {
            Some(died_at) => died_at.duration_since(self.started_at),
            None => self.started_at.elapsed(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn collision(&self) -> Option<CollisionType> {
        self.collision
    }

    pub fn last_plan(&self) -> Option<Plan> {
        self.last_plan
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
