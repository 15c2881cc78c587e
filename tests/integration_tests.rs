//! Integration tests for the versus game loop

use clap::Parser;

use duel_tetris::cli::{Args, Mode};
use duel_tetris::core::{Board, Match, RenderState};
use duel_tetris::input::KeyboardState;
use duel_tetris::term::{GameView, Viewport};
use duel_tetris::types::{Outcome, Player, PlayerInput};

/// Deterministic pseudo-random key mashing
fn scripted_input(frame: u64, player: u64) -> PlayerInput {
    let x = frame
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407 ^ player)
        >> 33;
    PlayerInput {
        left: x % 5 == 0,
        right: x % 7 == 0,
        down: x % 2 == 0,
        rotate_cw: x % 11 == 0,
        rotate_ccw: x % 13 == 0,
    }
}

fn play(seed: u64, frames: u64) -> (Vec<[RenderState; 2]>, Outcome) {
    let seed = seed.to_string();
    let args = Args::try_parse_from(["duel-tetris", "--seed", seed.as_str()]).unwrap();
    let mut game = Match::seeded(args.board_config(), args.catalog(), args.seeds(), 0).unwrap();

    let mut frames_seen = Vec::new();
    for frame in 0..frames {
        let now = frame * 100;
        game.tick(now, &scripted_input(frame, 1), &scripted_input(frame, 2));
        frames_seen.push(game.render_states());
        if game.outcome().is_over() {
            break;
        }
    }
    (frames_seen, game.outcome())
}

#[test]
fn test_same_seed_replays_identically() {
    let (a, outcome_a) = play(42, 600);
    let (b, outcome_b) = play(42, 600);
    assert_eq!(outcome_a, outcome_b);
    assert_eq!(a, b);
}

#[test]
fn test_match_reaches_an_outcome() {
    let mut game = Match::seeded(Default::default(), Default::default(), [7, 8], 0).unwrap();
    let mut frame = 0;
    while !game.outcome().is_over() {
        frame += 1;
        game.tick(frame * 100, &scripted_input(frame, 1), &scripted_input(frame, 2));
        assert!(frame < 100_000, "no outcome");
    }

    let last = game.render_states();
    let loser = game.outcome().loser().unwrap();
    assert!(last[loser.index()].game_over);
    // Player 2 only loses alone; a double top-out goes to player 2.
    assert!(!last[loser.opponent().index()].game_over || loser == Player::One);
}

#[test]
fn test_garbage_totals_match_lines_sent() {
    let args = Args::try_parse_from(["duel-tetris", "--seed", "11"]).unwrap();
    let mut game = Match::seeded(args.board_config(), args.catalog(), args.seeds(), 0).unwrap();
    let mut sent = [0u32; 2];
    for frame in 0..20_000 {
        let report = game.tick(frame * 100, &scripted_input(frame, 3), &scripted_input(frame, 4));
        sent[0] += report.garbage_sent[0];
        sent[1] += report.garbage_sent[1];
        if report.outcome.is_over() {
            break;
        }
        // While both boards live, every cleared row lands on the other side.
        assert_eq!(sent[0], game.board(Player::One).lines_cleared());
        assert_eq!(sent[1], game.board(Player::Two).lines_cleared());
        assert_eq!(sent[0], game.board(Player::Two).garbage_received());
        assert_eq!(sent[1], game.board(Player::One).garbage_received());
    }
    // Rows cleared by the locking piece that ended a board are not sent.
    assert!(sent[0] <= game.board(Player::One).lines_cleared());
    assert!(sent[1] <= game.board(Player::Two).lines_cleared());
}

#[test]
fn test_keyboard_to_render_pipeline() {
    let args = Args::try_parse_from(["duel-tetris", "--mode", "solo", "--seed", "5"]).unwrap();
    assert_eq!(args.mode, Mode::Solo);
    let mut board = Board::seeded(args.board_config(), args.catalog(), 0, 5, 0).unwrap();
    let mut keys = KeyboardState::new();
    let start_row = board.active().row;

    // Both players' soft-drop keys drive the single board.
    for now in 1..=4u64 {
        let code = if now % 2 == 0 {
            crossterm::event::KeyCode::Down
        } else {
            crossterm::event::KeyCode::Char('s')
        };
        keys.press(code, now);
        let [p1, p2] = keys.sample(now);
        board.apply_input(&p1.merge(p2), now);
        keys.release_all();
    }
    assert_eq!(board.active().row, start_row + 4);

    let view = GameView::default();
    let state = board.render_state();
    let size = view.required_size(std::slice::from_ref(&state));
    assert_eq!(size, Viewport::new(22, 23));
    let fb = view.render(std::slice::from_ref(&state), None, size);
    assert!(fb.row_text(0).starts_with("P1  L:0  G:0"));
}
