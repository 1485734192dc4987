//! Perft (performance test) for move generation correctness verification.

use crate::game::Game;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = game.clone();
        child.commit(mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = game
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let mut child = game.clone();
            child.commit(mv);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
