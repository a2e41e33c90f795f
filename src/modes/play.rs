use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{error, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Instant;
use tokio::task::JoinHandle;

use crate::game::{GameConfig, GameEngine, Summary, TickOutcome};
use crate::input::{InputHandler, InputQueue, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

type Term = Terminal<CrosstermBackend<Stderr>>;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished(Summary),
    Exit,
}

/// Interactive play: rounds until the player declines a replay or exits
pub struct PlayMode {
    config: GameConfig,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run rounds with cleanup
        let result = self.run_rounds(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_rounds(&mut self, terminal: &mut Term) -> Result<()> {
        let mut rounds = 0u32;
        loop {
            rounds += 1;
            let engine = GameEngine::new(self.config.clone()).context("Failed to start round")?;
            info!("round {} started", rounds);

            let summary = match self.play_round(terminal, engine).await? {
                RoundEnd::Finished(summary) => summary,
                RoundEnd::Exit => {
                    info!("exit requested during round {}", rounds);
                    return Ok(());
                }
            };
            info!(
                "round {} finished: score {} in {}s",
                rounds,
                summary.score,
                GameMetrics::format_seconds(summary.elapsed)
            );

            let mut events = EventStream::new();
            terminal.clear().context("Failed to clear terminal")?;
            terminal
                .draw(|frame| self.renderer.render_game_over(frame, &summary))
                .context("Failed to draw game over")?;
            if next_key(&mut events).await?.is_none() {
                return Ok(());
            }

            terminal.clear().context("Failed to clear terminal")?;
            terminal
                .draw(|frame| self.renderer.render_prompt(frame))
                .context("Failed to draw prompt")?;
            match next_key(&mut events).await? {
                Some(key) if self.input_handler.is_confirm(key) => {
                    terminal.clear().context("Failed to clear terminal")?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Play one round with the key reader running beside the tick loop
    async fn play_round(
        &mut self,
        terminal: &mut Term,
        mut engine: GameEngine,
    ) -> Result<RoundEnd> {
        let inputs = InputQueue::new();
        let reader = tokio::spawn(capture_input(inputs.clone()));

        let result = self.tick_loop(terminal, &mut engine, &inputs).await;
        let stopped = stop_reader(reader).await;

        let end = result?;
        stopped?;
        Ok(end)
    }

    /// Ticks run back to back: the next one is only scheduled once the
    /// previous one has been drawn.
    async fn tick_loop(
        &mut self,
        terminal: &mut Term,
        engine: &mut GameEngine,
        inputs: &InputQueue,
    ) -> Result<RoundEnd> {
        let mut metrics = GameMetrics::new();

        loop {
            let started = Instant::now();
            let outcome = engine.step(inputs).context("Game state became inconsistent")?;
            let interval = match outcome {
                TickOutcome::Running { interval } => interval,
                TickOutcome::Died => engine.tick_interval(),
                TickOutcome::GameOver(summary) => return Ok(RoundEnd::Finished(summary)),
                TickOutcome::Exit => return Ok(RoundEnd::Exit),
            };

            terminal
                .draw(|frame| self.renderer.render(frame, engine, &metrics))
                .context("Failed to draw frame")?;
            metrics.record_tick(started.elapsed());

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => return Ok(RoundEnd::Exit),
            }
        }
    }

    fn cleanup_terminal(&mut self, terminal: &mut Term) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Forward key presses into the queue until the stream ends or the task is aborted
async fn capture_input(inputs: InputQueue) {
    let handler = InputHandler::new();
    let mut events = EventStream::new();

    while let Some(event) = events.next().await {
        match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let KeyAction::Game(input) = handler.handle_key_event(key) {
                    inputs.push(input);
                }
            }
            Ok(_) => {}
            Err(err) => {
                warn!("terminal input failed: {err}");
                break;
            }
        }
    }
}

/// Abort the key reader and wait until it has dropped its event stream
async fn stop_reader(reader: JoinHandle<()>) -> Result<()> {
    reader.abort();
    match reader.await {
        Ok(()) => Ok(()),
        Err(err) if err.is_cancelled() => Ok(()),
        Err(err) => {
            error!("key reader failed: {err}");
            Err(anyhow!("Key reader panicked: {err}"))
        }
    }
}

async fn next_key(events: &mut EventStream) -> Result<Option<KeyEvent>> {
    while let Some(event) = events.next().await {
        if let Event::Key(key) = event.context("Failed to read terminal event")? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}
