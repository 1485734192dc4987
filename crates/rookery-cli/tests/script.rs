//! Whole sessions driven through `Session::run`.

use rookery_cli::{Session, SessionConfig};
use rookery_core::{GameStatus, MoveKind};

fn run(script: &str) -> (Session, String) {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn castling_and_en_passant_through_the_driver() {
    let script = "
        move e2e4
        move c7c5
        move g1f3
        move c5c4
        move f1e2
        move d7d5
        move e1g1
        move d5e4
        move d2d4
        move c4d3
        history
    ";
    let (session, out) = run(script);

    let kinds: Vec<MoveKind> = session.game().history().iter().map(|r| r.kind()).collect();
    assert_eq!(kinds[6], MoveKind::Castle);
    assert_eq!(kinds[7], MoveKind::Capture);
    assert_eq!(kinds[9], MoveKind::EnPassant);
    assert!(out.contains("7. e1g1 (castle)"));
    assert!(out.contains("10. c4d3 (en passant)"));
    assert!(out.contains("4. e1g1 d5e4\n"));
    assert_eq!(session.game().status(), GameStatus::InProgress);
}

#[test]
fn parse_errors_are_reported_inline() {
    let (session, out) = run("move\nset speed 3\nflag purple\nmoves q1\nmove e2e4\n");
    assert!(out.contains("error: move: missing argument"));
    assert!(out.contains("error: unknown option: speed"));
    assert!(out.contains("error: invalid color: purple"));
    assert!(out.contains("error: invalid square: q1"));
    assert_eq!(session.game().history().len(), 1);
}
