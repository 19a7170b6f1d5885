//! Terminal glassfall runner (default binary).
//!
//! Drives the simulation on a fixed 16ms tick: each frame drains pending key
//! events in arrival order, applies DAS/ARR repeats, advances gravity once,
//! and hands a read-only snapshot to the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use glassfall::core::{Game, GameSnapshot};
use glassfall::input::{handle_key_event, should_quit, InputHandler};
use glassfall::term::{Frame, GameView, TerminalRenderer, Viewport};
use glassfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed for the spawn RNG; the controller itself is deterministic per seed.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(wall_clock_seed());
    let view = GameView::default();
    let mut input = InputHandler::new();

    let mut snap = GameSnapshot::default();
    let mut frame = Frame::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut frame);
        term.draw_swap(&mut frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(action) = input.handle_key_press(key.code) {
                            game.apply_action(action);
                        } else if let Some(action) = handle_key_event(key) {
                            match action {
                                GameAction::MoveLeft
                                | GameAction::MoveRight
                                | GameAction::SoftDrop => {
                                    // Tracked by the DAS handler; None from
                                    // handle_key_press means already held.
                                }
                                _ => {
                                    game.apply_action(action);
                                }
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats.
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input.update(TICK_MS) {
                game.apply_action(action);
            }
            game.tick();
        }
    }
}
