//! Terminal driver (default binary).
//!
//! Puts the terminal in raw mode, forwards key presses into the game and ticks it with a
//! monotonic clock. Drawing is left to other front ends; this driver reports what
//! happens as `[blockfall]` lines on stderr.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use blockfall::cli::{event_line, parse_args, status_line, USAGE};
use blockfall::core::GameState;
use blockfall::input::{action_for_key, key_help};
use blockfall::types::{GameAction, TICK_MS};

macro_rules! log {
    ($($arg:tt)*) => {
        // raw mode needs the explicit carriage return
        eprint!("[blockfall] {}\r\n", format_args!($($arg)*))
    };
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    if config.help {
        println!("{}\n\nkeys:\n{}", USAGE, key_help());
        return Ok(());
    }

    let game_state = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    };

    terminal::enable_raw_mode()?;
    let result = run(game_state);

    // Always try to restore terminal state.
    let restored = terminal::disable_raw_mode();
    result?;
    restored?;
    Ok(())
}

fn run(mut game_state: GameState) -> Result<()> {
    let clock = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    game_state.start();
    log!("{}", status_line(&game_state.snapshot()));

    while !game_state.quit_requested() {
        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = action_for_key(key) {
                    apply(&mut game_state, action);
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let was_over = game_state.game_over();
            game_state.tick(clock.elapsed().as_millis() as u64);
            report(&mut game_state, was_over);
        }
    }

    log!("quit: {}", status_line(&game_state.snapshot()));
    io::Write::flush(&mut io::stderr())?;
    Ok(())
}

fn apply(game_state: &mut GameState, action: GameAction) {
    let was_over = game_state.game_over();
    if !game_state.apply_action(action) {
        return;
    }

    match action {
        GameAction::Pause => {
            log!("{}", if game_state.paused() { "paused" } else { "resumed" });
        }
        GameAction::Restart => {
            log!("restart: {}", status_line(&game_state.snapshot()));
        }
        _ => {}
    }
    report(game_state, was_over);
}

/// Log the lock event (if any) and the transition into game over
fn report(game_state: &mut GameState, was_over: bool) {
    if let Some(event) = game_state.take_last_event() {
        log!("{}", event_line(&event));
    }
    if game_state.game_over() && !was_over {
        log!("game over: {}", status_line(&game_state.snapshot()));
    }
}
