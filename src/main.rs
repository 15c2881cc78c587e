//! Terminal Tetris runner (default binary).
//!
//! Versus mode puts two boards side by side on one keyboard; solo mode plays a
//! single board with either key set. It uses crossterm for input and the
//! framebuffer renderer from `duel_tetris::term`.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use duel_tetris::cli::{Args, Mode};
use duel_tetris::core::{Board, Match, RenderState};
use duel_tetris::input::{should_quit, KeyboardState};
use duel_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use duel_tetris::types::{Outcome, Player, PlayerInput};

/// What the loop drives: a two-board match or a single board
enum Session {
    Versus(Match),
    Solo(Board),
}

impl Session {
    fn new(args: &Args, now_ms: u64) -> Result<Self> {
        let config = args.board_config();
        let catalog = args.catalog();
        let seeds = args.seeds();
        let session = match args.mode {
            Mode::Versus => Session::Versus(Match::seeded(config, catalog, seeds, now_ms)?),
            Mode::Solo => Session::Solo(Board::seeded(config, catalog, 0, seeds[0], now_ms)?),
        };
        Ok(session)
    }

    fn step(&mut self, now_ms: u64, inputs: [PlayerInput; 2]) {
        match self {
            Session::Versus(game) => {
                game.tick(now_ms, &inputs[0], &inputs[1]);
            }
            Session::Solo(board) => {
                if board.is_game_over() {
                    return;
                }
                board.apply_input(&inputs[0].merge(inputs[1]), now_ms);
                if board.tick(now_ms).is_game_over() {
                    info!(lines = board.lines_cleared(), "solo game over");
                }
            }
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        match self {
            Session::Versus(game) => Some(game.outcome()),
            Session::Solo(_) => None,
        }
    }

    fn render_states(&self) -> Vec<RenderState> {
        match self {
            Session::Versus(game) => game.render_states().to_vec(),
            Session::Solo(board) => vec![board.render_state()],
        }
    }

    fn render_states_into(&self, out: &mut [RenderState]) {
        match (self, out) {
            (Session::Versus(game), [one, two]) => {
                game.board(Player::One).render_state_into(one);
                game.board(Player::Two).render_state_into(two);
            }
            (Session::Solo(board), [one]) => board.render_state_into(one),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let clock = Instant::now();
    // Fail on bad flags before the terminal is switched to raw mode.
    let session = Session::new(&args, 0)?;
    info!(mode = ?args.mode, fps = args.fps(), "starting");

    let mut term = TerminalRenderer::new();
    let reports_releases = term.enter()?;

    let result = run(&mut term, session, &args, clock, reports_releases);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(args.log_level)
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    mut session: Session,
    args: &Args,
    clock: Instant,
    reports_releases: bool,
) -> Result<()> {
    let view = GameView::default();
    let mut keys = if reports_releases {
        KeyboardState::new().with_release_timeout(None)
    } else {
        KeyboardState::new()
    };

    let mut states = session.render_states();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_micros(1_000_000 / u64::from(args.fps().max(1)));
    let mut last_tick = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    loop {
        // Render.
        session.render_states_into(&mut states);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&states, session.outcome(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    keys.handle_event(key, now_ms());
                }
                Event::Resize(_, _) => term.invalidate(),
                Event::FocusLost => keys.release_all(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now = now_ms();
            let inputs = keys.sample(now);
            session.step(now, inputs);
        }
    }
}
