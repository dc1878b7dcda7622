use tui_2048::core::{Board, GameSnapshot, GameState};
use tui_2048::term::{tile_bg, AnchorY, GameView, Viewport};
use tui_2048::types::GameStatus;

fn snapshot_of(rows: [[u32; 4]; 4]) -> GameSnapshot {
    let mut gs = GameState::new(1);
    gs.set_board(Board::from_rows(rows).unwrap());
    gs.snapshot()
}

fn all_text(fb: &tui_2048::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 4 tiles of 7x3 plus border => 30x14
    let fb = view.render(&snap, Viewport::new(30, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(29, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_values_and_blanks_zeros() {
    let snap = snapshot_of([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
    let fb = GameView::default().render(&snap, Viewport::new(30, 14));

    // Tile (0,0) spans x 1..8, y 1..4; "2" sits in the middle row, column 1 + 3.
    assert_eq!(fb.get(4, 2).unwrap().ch, '2');
    assert_eq!(fb.get(1, 1).unwrap().style.bg, tile_bg(2));

    // Tile (3,3) spans x 22..29, y 10..13; "2048" starts at 22 + 1.
    let digits: String = (23..27).map(|x| fb.get(x, 11).unwrap().ch).collect();
    assert_eq!(digits, "2048");
    assert_eq!(fb.get(22, 10).unwrap().style.bg, tile_bg(2048));

    // Empty tile (1,1): no digits, empty-cell color.
    for x in 8..15 {
        for y in 4..7 {
            let cell = fb.get(x, y).unwrap();
            assert_eq!(cell.ch, ' ');
            assert_eq!(cell.style.bg, tile_bg(0));
        }
    }
}

#[test]
fn term_view_shows_terminal_messages() {
    let won = snapshot_of([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(won.status, GameStatus::Won);
    let fb = GameView::default().render(&won, Viewport::new(30, 14));
    assert!(all_text(&fb).contains("YOU WIN!"));

    let lost = snapshot_of([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let fb = GameView::default().render(&lost, Viewport::new(30, 14));
    assert!(all_text(&fb).contains("GAME OVER"));

    let playing = snapshot_of([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&playing, Viewport::new(30, 14));
    let text = all_text(&fb);
    assert!(!text.contains("YOU WIN!"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start();
    let mut snap = gs.snapshot();
    snap.moves = 1234;
    snap.max_tile = 512;

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(60, 20));
    let text = all_text(&fb);
    assert!(text.contains("MOVES"));
    assert!(text.contains("1234"));
    assert!(text.contains("MAX"));
    assert!(text.contains("512"));
    assert!(text.contains("playing"));

    // Too narrow for the panel.
    let fb = view.render(&snap, Viewport::new(30, 14));
    assert!(!all_text(&fb).contains("MOVES"));
}
