use blockfall::core::{GameState, ScriptedSource};
use blockfall::term::{color_rgb, GameView, Viewport};
use blockfall::types::{Color, ShapeKind};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board.set(0, 19, Some(Color::Orange));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Orange));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece() {
    let mut state = GameState::with_source(ScriptedSource::from_kinds(&[ShapeKind::I], Color::Cyan));
    state.start();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));

    // I spawns at x=3..=6 on row 0
    for bx in 3..7u16 {
        assert_eq!(fb.get(1 + bx * 2, 1).unwrap().ch, '█');
    }
    assert_eq!(fb.get(1 + 2 * 2, 1).unwrap().ch, '·');
}

#[test]
fn term_view_shows_mode_overlay() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let ready = view.render(&GameState::new(1).snapshot(), vp);
    assert!(ready.row_text(11).contains("PRESS N"));

    let mut state = GameState::new(1);
    state.start();
    let running = view.render(&state.snapshot(), vp);
    assert!((0..22).all(|y| !running.row_text(y).contains("PAUSED")));

    state.toggle_pause();
    let paused = view.render(&state.snapshot(), vp);
    assert!(paused.row_text(11).contains("PAUSED"));
}

#[test]
fn term_view_side_panel_shows_score() {
    let mut state = GameState::new(7);
    state.start();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(60, 24));

    let text: Vec<String> = (0..24).map(|y| fb.row_text(y)).collect();
    assert!(text.iter().any(|l| l.contains("SCORE")));
    assert!(text.iter().any(|l| l.contains("LEVEL")));
    assert!(text.iter().any(|l| l.contains("NEXT")));
}

#[test]
fn term_view_tiny_viewport_does_not_panic() {
    let mut state = GameState::new(3);
    state.start();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
