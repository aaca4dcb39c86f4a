//! Terminal block puzzle runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `blockgrid::term` (no widget library).

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::prelude::*;

use blockgrid::core::Session;
use blockgrid::input::{handle_key_event, should_quit};
use blockgrid::term::{GameView, RenderThrottle, TerminalRenderer, Viewport};
use blockgrid::types::TICK_MS;
use blockgrid::{App, AppConfig, JsonFileHighScoreStore};

/// Redraw at least this often even when nothing changed.
const IDLE_REFRESH_MS: u64 = 500;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!(seed = config.seed, path = %config.high_score_path.display(), "starting");

    let store = JsonFileHighScoreStore::new(config.high_score_path.clone());
    let mut app = App::new(Session::new(config.seed, store), config.show_preview);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = app.snapshot().score, "exiting");
    result
}

/// Log to a file when configured; the terminal itself belongs to the renderer.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            config.log_level,
        ))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App<JsonFileHighScoreStore>) -> Result<()> {
    let view = GameView::default();
    let mut fb = blockgrid::term::FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(IDLE_REFRESH_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.frame_fingerprint(), app.animating()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(app.snapshot(), &app.hud(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply_action(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis() as u32);
        }
    }
}
