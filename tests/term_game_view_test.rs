use duel_tetris::core::{BoardConfig, Match, RenderState, ShapeCatalog};
use duel_tetris::term::{color_rgb, FrameBuffer, GameView, Viewport};
use duel_tetris::types::{ColorTag, Outcome};

fn states() -> [RenderState; 2] {
    Match::seeded(BoardConfig::default(), ShapeCatalog::extended(), [1, 2], 0)
        .unwrap()
        .render_states()
}

fn text_at(fb: &FrameBuffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len).filter_map(|cx| fb.get(cx, y)).map(|c| c.ch).collect()
}

fn all_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_required_size_fits_both_boards() {
    let view = GameView::default();
    // Player 2 starts 13 cells in, so 2 * (13 + 10) + 2 columns; 20 rows + border + header.
    assert_eq!(view.required_size(&states()), Viewport::new(48, 23));
}

#[test]
fn term_view_renders_both_frames() {
    let view = GameView::default();
    let fb = view.render(&states(), Some(Outcome::InProgress), Viewport::new(48, 23));

    // Player 1 frame below the header row.
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(21, 22).unwrap().ch, '┘');

    // Player 2 frame at 13 cells * 2 columns.
    assert_eq!(fb.get(26, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(47, 22).unwrap().ch, '┘');

    // Gap between the frames stays blank.
    assert_eq!(text_at(&fb, 22, 10, 4), "    ");
}

#[test]
fn term_view_draws_headers() {
    let mut states = states();
    states[0].lines_cleared = 3;
    states[1].garbage_received = 12;

    let fb = GameView::default().render(&states, None, Viewport::new(48, 23));
    assert_eq!(text_at(&fb, 0, 0, 12), "P1  L:3  G:0");
    assert_eq!(text_at(&fb, 26, 0, 13), "P2  L:0  G:12");
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut states = states();
    states[0].active.cells.clear();
    states[0].cells[19 * 10] = Some(ColorTag::Red);

    let fb = GameView::default().render(&states, None, Viewport::new(48, 23));

    // Inside border: (1, 2) origin. Each cell is 2 chars wide.
    let cell = fb.get(1, 2 + 19).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, color_rgb(ColorTag::Red));
    assert_eq!(fb.get(2, 2 + 19).unwrap().ch, '█');
    assert_eq!(fb.get(3, 2 + 19).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_on_top_row() {
    let states = states();
    let fb = GameView::default().render(&states, None, Viewport::new(48, 23));

    for &(row, col) in states[0].active.cells.iter() {
        let x = 1 + col as u16 * 2;
        let y = 2 + row as u16;
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(states[0].active.color));
    }
}

#[test]
fn term_view_shows_win_and_lose() {
    let mut states = states();
    states[0].game_over = true;

    let fb = GameView::default().render(&states, Some(Outcome::Player2Wins), Viewport::new(48, 23));

    // Overlay row is the frame's vertical middle: 1 + 22 / 2.
    assert_eq!(text_at(&fb, 9, 12, 4), "LOSE");
    assert_eq!(text_at(&fb, 26 + 9, 12, 3), "WIN");
    assert!(!all_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_shows_game_over_for_single_board() {
    let mut solo = states()[0].clone();
    solo.game_over = true;

    let fb = GameView::default().render(std::slice::from_ref(&solo), None, Viewport::new(22, 23));
    assert!(all_text(&fb).contains("GAME OVER"));
    assert!(!all_text(&fb).contains("P2"));
}

#[test]
fn term_view_clips_to_small_viewports() {
    let fb = GameView::default().render(&states(), None, Viewport::new(10, 5));
    assert_eq!((fb.width(), fb.height()), (10, 5));
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
}
