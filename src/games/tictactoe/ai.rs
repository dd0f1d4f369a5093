//! Random AI opponent.

use super::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks a uniformly random empty square, or `None` on a full board.
///
/// No lookahead and no blocking: every empty square is equally likely.
#[instrument(skip(board, rng))]
pub fn select_ai_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let choice = Position::valid_moves(board).choose(rng).copied();
    debug!(?choice, "AI chose position");
    choice
}

#[cfg(test)]
mod tests {
    use super::super::{Player, Square};
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_ai_move(&board, &mut rng), None);
    }

    #[test]
    fn test_only_empty_square_is_chosen() {
        let mut board = Board::new();
        for pos in Position::ALL.iter().filter(|p| **p != Position::BottomCenter) {
            board.set(*pos, Square::Occupied(Player::O));
        }
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(select_ai_move(&board, &mut rng), Some(Position::BottomCenter));
        }
    }

    #[test]
    fn test_every_empty_square_is_reachable() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Position> = (0..500)
            .filter_map(|_| select_ai_move(&board, &mut rng))
            .collect();
        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&Position::Center));
    }

    #[test]
    fn test_seeded_choice_is_reproducible() {
        let board = Board::new();
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10).map(|_| select_ai_move(&board, &mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10).map(|_| select_ai_move(&board, &mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
