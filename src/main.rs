//! Terminal LED-matrix puzzle runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input
//! and a custom framebuffer-based renderer that emulates the 8x8 matrix.
//! Flow mirrors the hardware original: attract screen, game, game-over
//! screen, back to attract.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use matrix_tetris::core::{GameSession, RenderSnapshot};
use matrix_tetris::input::{should_quit, CommandBatch, InputHandler};
use matrix_tetris::term::{FrameBuffer, MatrixView, TerminalRenderer, Viewport};
use matrix_tetris::types::{InputCommand, FRAME_RATE};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = MatrixView::default();
    loop {
        if !attract(term, &view)? {
            return Ok(());
        }
        let Some(score) = play(term, &view)? else {
            return Ok(());
        };
        if !game_over_screen(term, &view, score)? {
            return Ok(());
        }
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Seed from the wall clock; exact value only matters for variety.
fn clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(now) => (now.as_secs() as u32) ^ now.subsec_nanos(),
        Err(_) => 0x5eed,
    }
}

/// Cycle the start animation until a key starts the game.
///
/// Returns false when the player quits instead.
fn attract(term: &mut TerminalRenderer, view: &MatrixView) -> Result<bool> {
    let frame_duration = Duration::from_millis(u64::from(1000 / FRAME_RATE));
    let mut fb = FrameBuffer::new(0, 0);
    let mut frame: u32 = 0;

    loop {
        view.render_attract_into(frame, viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(frame_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(false);
                    }
                    // Any other key starts a game.
                    return Ok(true);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        frame = frame.wrapping_add(1);
    }
}

/// One game, frame by frame until game over.
///
/// Returns the final score, or None when the player quits mid-game.
fn play(term: &mut TerminalRenderer, view: &MatrixView) -> Result<Option<u32>> {
    let mut session = GameSession::new(clock_seed());
    let mut input = InputHandler::new();
    let mut commands = CommandBatch::new();
    let mut snapshot = RenderSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut frame_start = Instant::now();
    while !session.is_game_over() {
        session.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, session.score(), viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        // Collect events until the frame deadline; the session applies the
        // whole batch at once.
        let frame_duration = session.frame_duration();
        loop {
            let timeout = frame_duration.saturating_sub(frame_start.elapsed());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => match key.kind {
                    // Repeats refresh the drop hold without re-triggering it.
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if let Some(cmd) = input.handle_key_press(key) {
                            if cmd == InputCommand::Quit {
                                return Ok(None);
                            }
                            let _ = commands.try_push(cmd);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(cmd) = input.handle_key_release(key) {
                            let _ = commands.try_push(cmd);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        frame_start = Instant::now();

        // Terminals without release events: time out stale drop holds.
        if let Some(cmd) = input.update() {
            let _ = commands.try_push(cmd);
        }

        session.frame(&commands);
        commands.clear();
    }

    Ok(Some(session.score()))
}

/// Show the red cross and final score, then wait for a key.
///
/// Returns false when the player quits instead of playing again.
fn game_over_screen(term: &mut TerminalRenderer, view: &MatrixView, score: u32) -> Result<bool> {
    let mut fb = FrameBuffer::new(0, 0);

    // Hold the screen briefly, swallowing leftover gameplay keystrokes.
    let hold_until = Instant::now() + Duration::from_millis(2000);
    loop {
        view.render_game_over_into(score, viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        let remaining = hold_until.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        if event::poll(remaining)? {
            if let Event::Resize(..) = event::read()? {
                term.invalidate();
            }
        }
    }

    loop {
        view.render_game_over_into(score, viewport(), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(!should_quit(key));
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}
