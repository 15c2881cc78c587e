//! Match tests - garbage exchange and outcome

use duel_tetris::core::{
    BoardConfig, LineClearResult, Match, Piece, Shape, ShapeCatalog, VERSUS_GAP_CELLS,
};
use duel_tetris::types::{ColorTag, Outcome, Player, PlayerInput};

const IDLE: PlayerInput = PlayerInput::IDLE;

fn dot() -> Shape {
    Shape::from_pattern(&["#"]).unwrap()
}

fn dot_match() -> Match {
    let catalog = ShapeCatalog::new(vec![dot()], vec![ColorTag::Blue]).unwrap();
    Match::seeded(BoardConfig::default(), catalog, [10, 20], 0).unwrap()
}

/// Fill the bottom row of `players` one block per tick; the tenth block clears it.
fn clear_bottom_row(m: &mut Match, players: &[Player], now: &mut u64) -> [u32; 2] {
    let mut sent = [0; 2];
    for col in 0..10 {
        for &player in players {
            assert!(m
                .board_mut(player)
                .place(Piece::at(dot(), ColorTag::Blue, 19, col)));
        }
        *now += 301;
        let report = m.tick(*now, &IDLE, &IDLE);
        for (total, s) in sent.iter_mut().zip(report.garbage_sent) {
            *total += s;
        }
    }
    sent
}

#[test]
fn test_boards_are_laid_out_side_by_side() {
    let m = dot_match();
    let [one, two] = m.render_states();
    assert_eq!(one.x_offset, 0);
    assert_eq!(two.x_offset, 10 + VERSUS_GAP_CELLS);
}

#[test]
fn test_cleared_row_becomes_opponent_garbage() {
    let mut m = dot_match();
    let mut now = 0;
    let sent = clear_bottom_row(&mut m, &[Player::One], &mut now);

    assert_eq!(sent, [1, 0]);
    assert_eq!(m.board(Player::One).lines_cleared(), 1);
    assert_eq!(m.board(Player::One).garbage_received(), 0);
    assert_eq!(m.board(Player::Two).garbage_received(), 1);

    let bottom = m.board(Player::Two).grid().row(19);
    assert_eq!(bottom.iter().filter(|c| c.is_none()).count(), 1);
    assert!(bottom.iter().flatten().all(|c| *c == ColorTag::GARBAGE));
    assert_eq!(m.outcome(), Outcome::InProgress);
}

#[test]
fn test_simultaneous_clears_trade_garbage() {
    let mut m = dot_match();
    let mut now = 0;
    let sent = clear_bottom_row(&mut m, &Player::BOTH, &mut now);

    assert_eq!(sent, [1, 1]);
    for player in Player::BOTH {
        let board = m.board(player);
        assert_eq!(board.lines_cleared(), 1);
        assert_eq!(board.garbage_received(), 1);
        // Own row is gone; only the opponent's garbage row is left.
        assert_eq!(board.grid().filled_count(), 9);
    }
}

#[test]
fn test_report_carries_both_results() {
    let mut m = dot_match();
    let report = m.tick(301, &IDLE, &IDLE);
    assert_eq!(report.results, [LineClearResult::Cleared(0); 2]);
    assert_eq!(report.result(Player::Two), LineClearResult::Cleared(0));
    assert_eq!(report.outcome, Outcome::InProgress);
}

#[test]
fn test_idle_match_ends_and_stays_frozen() {
    let mut m = Match::seeded(BoardConfig::default(), ShapeCatalog::extended(), [3, 4], 0)
        .unwrap();
    let mut now = 0;
    while !m.outcome().is_over() {
        now += 301;
        m.tick(now, &IDLE, &IDLE);
        assert!(now < 1_000_000, "nobody topped out");
    }

    let outcome = m.outcome();
    let loser = outcome.loser().unwrap();
    assert!(m.board(loser).is_game_over());

    let frozen = m.render_states();
    let mash = PlayerInput {
        left: true,
        right: true,
        down: true,
        rotate_cw: true,
        rotate_ccw: true,
    };
    for _ in 0..50 {
        now += 301;
        let report = m.tick(now, &mash, &mash);
        assert_eq!(report.outcome, outcome);
        assert_eq!(report.garbage_sent, [0, 0]);
    }
    assert_eq!(m.render_states(), frozen);
}

#[test]
fn test_board_ended_through_handle_stops_both_boards() {
    let mut m = dot_match();
    let mut now = 0;
    // Stack dots in one column of player 1 until the spawn is blocked.
    while !m.board(Player::One).is_game_over() {
        now += 301;
        m.board_mut(Player::One).tick(now);
        assert!(now < 1_000_000, "player 1 never topped out");
    }
    assert_eq!(m.outcome(), Outcome::Player2Wins);

    let before = m.render_states();
    let down = PlayerInput {
        down: true,
        ..IDLE
    };
    let report = m.tick(now + 301, &down, &down);
    assert_eq!(report.outcome, Outcome::Player2Wins);
    assert_eq!(report.results, [LineClearResult::GameOver; 2]);
    assert_eq!(m.render_states(), before);
}

#[test]
fn test_match_rejects_boards_too_wide_for_the_terminal() {
    let catalog = ShapeCatalog::extended();
    assert!(Match::seeded(BoardConfig::with_size(65_534, 4), catalog, [1, 2], 0).is_err());
}
