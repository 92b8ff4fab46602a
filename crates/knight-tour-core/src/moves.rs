use crate::square::{Square, BOARD_SIZE};

/// The eight knight offsets as `(rank, file)` deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// All in-bounds knight targets from `from`, sorted ascending.
///
/// Visited-agnostic; [`legal_moves`] applies the visited filter on top.
pub fn knight_targets(from: Square) -> Vec<Square> {
    let rank = from.rank() as i8;
    let file = from.file() as i8;
    let bound = BOARD_SIZE as i8;

    let mut targets = Vec::with_capacity(KNIGHT_OFFSETS.len());
    for (dr, df) in KNIGHT_OFFSETS {
        let r = rank + dr;
        let f = file + df;
        if (0..bound).contains(&r) && (0..bound).contains(&f) {
            targets.push(Square::new(r as u8, f as u8));
        }
    }
    targets.sort_unstable();
    targets
}

/// Knight targets from `from` that are absent from `visited`, sorted ascending.
///
/// The ascending order is part of the contract: hosts render the highlight
/// set in this order, and it keeps results deterministic.
pub fn legal_moves(from: Square, visited: &[Square]) -> Vec<Square> {
    let mut moves = knight_targets(from);
    moves.retain(|square| !visited.contains(square));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(squares: &[Square]) -> Vec<u8> {
        squares.iter().map(|s| s.index()).collect()
    }

    #[test]
    fn test_corner_has_two_targets() {
        let a1 = Square::new(0, 0);
        assert_eq!(indices(&knight_targets(a1)), vec![10, 17]);

        let h8 = Square::new(7, 7);
        assert_eq!(indices(&knight_targets(h8)), vec![46, 53]);
    }

    #[test]
    fn test_center_has_eight_targets() {
        let d4 = Square::new(3, 3);
        assert_eq!(
            indices(&knight_targets(d4)),
            vec![10, 12, 17, 21, 33, 37, 42, 44]
        );
    }

    #[test]
    fn test_every_square_has_two_to_eight_targets() {
        for square in Square::all() {
            let targets = knight_targets(square);
            assert!(
                (2..=8).contains(&targets.len()),
                "{} has {} targets",
                square,
                targets.len()
            );
            // Strictly ascending, so no duplicates either.
            assert!(targets.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_targets_are_knight_shaped() {
        for square in Square::all() {
            for target in knight_targets(square) {
                let dr = (square.rank() as i8 - target.rank() as i8).abs();
                let df = (square.file() as i8 - target.file() as i8).abs();
                assert!((dr, df) == (1, 2) || (dr, df) == (2, 1));
            }
        }
    }

    #[test]
    fn test_visited_filter() {
        let a1 = Square::new(0, 0);
        let b3 = Square::new(2, 1);
        assert_eq!(indices(&legal_moves(a1, &[a1])), vec![10, 17]);
        assert_eq!(indices(&legal_moves(a1, &[a1, b3])), vec![10]);
    }

    #[test]
    fn test_fully_enclosed_position_has_no_moves() {
        let a1 = Square::new(0, 0);
        let visited: Vec<Square> = knight_targets(a1)
            .into_iter()
            .chain(std::iter::once(a1))
            .collect();
        assert!(legal_moves(a1, &visited).is_empty());
    }
}
