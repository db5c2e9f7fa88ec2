// rules.rs - Neighbor counting and the generation step

use crate::grid::Board;

/// Moore neighborhood as `(dy, dx)` offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, 1),
    (1, 1), (1, 0), (1, -1), (0, -1),
];

/// Counts live neighbors of `(x, y)`. The board edge is a wall: offsets that
/// land outside the grid count as dead, nothing wraps.
pub fn count_live_neighbors(board: &Board, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for &(dy, dx) in &NEIGHBOR_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if board.contains(nx, ny) && board.alive(nx, ny) {
            count += 1;
        }
    }
    count
}

#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the next generation into a fresh board.
pub fn step(board: &Board) -> Board {
    let mut next = board.clone();
    step_into(board, &mut next);
    next
}

/// Writes the generation after `current` into `next`. Both boards must have
/// the same dimensions; every cell of `next` is overwritten.
pub fn step_into(current: &Board, next: &mut Board) {
    debug_assert_eq!((current.rows(), current.cols()), (next.rows(), next.cols()));
    for y in 0..current.rows() {
        for x in 0..current.cols() {
            let neighbors = count_live_neighbors(current, x, y);
            next.put(x, y, next_state(current.alive(x, y), neighbors));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Board {
        let mut board = Board::new(rows, cols).unwrap();
        for &(x, y) in live {
            board.set(x, y, true).unwrap();
        }
        board
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn empty_board_stays_empty() {
        let board = Board::new(3, 3).unwrap();
        assert!(step(&board).live_cells().is_empty());
    }

    #[test]
    fn interior_cell_sees_all_eight() {
        let mut board = Board::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                board.set(x, y, true).unwrap();
            }
        }
        assert_eq!(count_live_neighbors(&board, 1, 1), 8);
        assert_eq!(count_live_neighbors(&board, 0, 0), 3);
        assert_eq!(count_live_neighbors(&board, 2, 1), 5);
    }

    #[test]
    fn corners_do_not_wrap() {
        let board = board_with(4, 4, &[(3, 3), (3, 0), (0, 3)]);
        assert_eq!(count_live_neighbors(&board, 0, 0), 0);

        let lonely = board_with(6, 6, &[(0, 0)]);
        assert!(step(&lonely).live_cells().is_empty());
    }

    #[test]
    fn birth_on_exactly_three() {
        let board = board_with(3, 3, &[(0, 0), (2, 0), (0, 2)]);
        let next = step(&board);
        assert_eq!(next.get(1, 1), Ok(true));
    }

    #[test]
    fn dimensions_are_preserved() {
        for (rows, cols) in [(1, 1), (1, 7), (7, 1), (20, 30), (13, 5)] {
            let board = Board::new(rows, cols).unwrap();
            let next = step(&board);
            assert_eq!((next.rows(), next.cols()), (rows, cols));
        }
    }

    #[test]
    fn step_into_overwrites_stale_cells() {
        let board = board_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let mut scratch = board_with(4, 4, &[(0, 0), (3, 3)]);
        step_into(&board, &mut scratch);
        assert_eq!(scratch, board);
    }
}
