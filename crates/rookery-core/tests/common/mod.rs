//! Shared helpers for the integration tests.

#![allow(dead_code)]

use rookery_core::{Color, Game, MoveReport, Piece, Setup, Square};

pub fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap_or_else(|| panic!("bad square {s}"))
}

/// Build a setup from an 8-line diagram, rank 8 first. `.` is empty,
/// uppercase letters are White and lowercase are Black.
pub fn diagram(rows: &str, side_to_move: Color) -> Setup {
    let mut setup = Setup::new(side_to_move);
    let lines: Vec<&str> = rows
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(lines.len(), 8, "diagram needs 8 ranks");
    for (row, line) in lines.iter().enumerate() {
        let rank = 7 - row as u8;
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), 8, "rank {} needs 8 files", rank + 1);
        for (file, c) in cells.into_iter().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_letter(c).unwrap_or_else(|| panic!("bad piece {c}"));
            setup = setup.place(piece, Square::new(file as u8, rank).unwrap());
        }
    }
    setup
}

/// Play `e2e4`-style moves, panicking on the first refusal.
pub fn play(game: &mut Game, moves: &[&str]) -> Vec<MoveReport> {
    moves
        .iter()
        .map(|mv| {
            let (from, to) = mv.split_at(2);
            game.make_move(sq(from), sq(to))
                .unwrap_or_else(|e| panic!("{mv} refused: {e}"))
        })
        .collect()
}
