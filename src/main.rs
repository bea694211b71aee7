//! Terminal runner (default binary).
//!
//! crossterm input, a fixed-interval gravity scheduler and the
//! framebuffer renderer. Status lines go to stderr only after the terminal
//! has been restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::core::{GameSnapshot, GameState, TickScheduler};
use blockfall::input::{accepts_kind, map_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::Command;
use blockfall::{Config, EventLog, LogRecord};

fn main() -> Result<()> {
    let config = Config::from_env();

    let mut log = match config.log_path.as_deref() {
        Some(path) => match EventLog::open(path) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("[blockfall] event log disabled: {e:#}");
                EventLog::disabled()
            }
        },
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();

    let game = result?;
    eprintln!(
        "[blockfall] seed {} score {} level {} lines {}",
        config.seed,
        game.score(),
        game.level(),
        game.lines()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config, log: &mut EventLog) -> Result<GameState> {
    let mut game = GameState::new(config.seed);
    log.record(&LogRecord::SessionStart {
        seed: game.seed(),
        width: game.board().width(),
        height: game.board().height(),
    });

    let view = GameView::new(config.cell_width, 1);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut scheduler = TickScheduler::new();
    scheduler.arm(now_ms(), game.tick_interval());
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.present(&fb)?;
            dirty = false;
        }

        // Input with timeout until the next tick.
        let timeout = scheduler.time_until_due(now_ms()).unwrap_or(0);
        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) if accepts_kind(key.kind) => {
                    if should_quit(key) {
                        log.record(&LogRecord::SessionEnd {
                            score: game.score(),
                            level: game.level(),
                            lines: game.lines(),
                        });
                        return Ok(game);
                    }
                    if let Some(command) = map_key(key) {
                        if game.apply(command) {
                            dirty = true;
                            if command.is_control() {
                                log.record(&LogRecord::command(command, game.episode_id()));
                            }
                            // A fresh game waits a full interval before its first tick.
                            if matches!(command, Command::Start | Command::Restart) {
                                scheduler.arm(now_ms(), game.tick_interval());
                            }
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if scheduler.poll(now_ms(), &mut game) {
            dirty = true;
        }

        if let Some(ev) = game.take_last_event() {
            log.record(&LogRecord::lock(&ev));
            if ev.game_over {
                log.record(&LogRecord::GameOver {
                    score: ev.score,
                    level: ev.level,
                    lines: game.lines(),
                });
            }
        }
    }
}
