//! Terminal host tests - the session drawn through the terminal ports

use matrix_tetris::core::GameSession;
use matrix_tetris::engine::{LogAudio, Runtime};
use matrix_tetris::term::{
    palette, MatrixView, Screen, StatusView, TermDisplay, TermIndicator, Viewport,
};
use matrix_tetris::types::{Config, InputEvent, ATTRACT_MESSAGE};

fn runtime() -> Runtime<TermDisplay, LogAudio, TermIndicator> {
    Runtime::new(
        &Config::default(),
        TermDisplay::new(1, 10),
        LogAudio::new(),
        TermIndicator::new(),
    )
    .expect("valid config")
}

#[test]
fn attract_text_scrolls_through_the_matrix() {
    let mut rt = runtime();
    for _ in 0..3 {
        rt.tick();
    }
    match rt.machine().display().screen() {
        Screen::Text(m) => assert_eq!(m.text(), ATTRACT_MESSAGE),
        other => panic!("expected text, got {:?}", other),
    }

    let display = rt.machine_mut().display_mut();
    // Ten one-column steps bring the head of the text to the left edge.
    for _ in 0..10 {
        display.advance_frame();
    }

    let view = MatrixView::default();
    let viewport = Viewport::new(40, 12);
    let status = StatusView::new(rt.machine().session(), false);
    let fb = view.render(rt.machine().display(), &status, viewport);
    let (_, y0) = view.origin(viewport);
    assert!(fb.row_text(y0 + 4).contains("Push"));
}

#[test]
fn playing_grid_matches_session_bitmap() {
    let mut rt = runtime();
    for _ in 0..3 {
        rt.tick();
    }
    rt.press(InputEvent::Start);
    for _ in 0..3 {
        rt.tick();
    }

    let session: &GameSession = rt.machine().session();
    let bitmap = session.grid().bitmap();
    assert_eq!(rt.machine().display().screen(), &Screen::Grid(bitmap));

    let view = MatrixView::default();
    let viewport = Viewport::new(40, 12);
    let fb = view.render(
        rt.machine().display(),
        &StatusView::new(session, rt.machine().indicator().is_on()),
        viewport,
    );
    let (x0, y0) = view.origin(viewport);
    for (y, row) in bitmap.iter().enumerate() {
        for (x, &lit) in row.iter().enumerate() {
            let cell = fb
                .get(x0 + 1 + 2 * x as u16, y0 + 1 + y as u16)
                .expect("inside viewport");
            let expected = if lit { palette::LED_ON } else { palette::LED_OFF };
            assert_eq!(cell.style.fg, expected, "led ({}, {})", x, y);
        }
    }
}
