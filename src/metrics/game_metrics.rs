use std::collections::VecDeque;
use std::time::Duration;

/// Number of recent ticks kept for the average
pub const TICK_WINDOW: usize = 300;

/// Per-round wall-clock timings shown on the debug panel
pub struct GameMetrics {
    pub last_tick: Duration,
    recent_ticks: VecDeque<Duration>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            last_tick: Duration::ZERO,
            recent_ticks: VecDeque::with_capacity(TICK_WINDOW),
        }
    }

    /// Record how long one tick took to compute and draw
    pub fn record_tick(&mut self, duration: Duration) {
        self.last_tick = duration;
        if self.recent_ticks.len() >= TICK_WINDOW {
            self.recent_ticks.pop_front();
        }
        self.recent_ticks.push_back(duration);
    }

    /// Average over the rolling window
    pub fn average_tick(&self) -> Duration {
        if self.recent_ticks.is_empty() {
            Duration::ZERO
        } else {
            let sum: Duration = self.recent_ticks.iter().sum();
            sum / self.recent_ticks.len() as u32
        }
    }

    /// Seconds with millisecond precision
    pub fn format_seconds(elapsed: Duration) -> String {
        format!("{:.3}", elapsed.as_secs_f64())
    }

    /// Milliseconds with microsecond precision
    pub fn format_millis(duration: Duration) -> String {
        format!("{:.3}", duration.as_secs_f64() * 1000.0)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
