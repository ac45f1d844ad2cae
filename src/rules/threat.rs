//! Open-three and jump-three threat detection
//!
//! Scans every axis-aligned 4-cell window for a triple with exactly one
//! empty cell. Filling that cell would let the opponent threaten an open
//! four next turn, so the selector treats it as a must-consider block.

use crate::board::{Board, Cell, Pos, BOARD_SIZE};

use super::line::AXES;

/// Every empty cell that blocks one of the opponent's open or jump
/// triples. The four window patterns, with `X` = `opponent`:
/// `[_,X,X,X]`, `[X,X,X,_]`, `[X,X,_,X]`, `[X,_,X,X]`.
///
/// Deduplicated, in row-major order.
pub fn find_three_threats(board: &Board, opponent: Cell) -> Vec<Pos> {
    let mut blocks = Vec::new();

    for r in 0..BOARD_SIZE as i32 {
        for c in 0..BOARD_SIZE as i32 {
            for &(dr, dc) in &AXES {
                // 4-cell window starting at (r, c)
                let mut window = [Pos::new(0, 0); 4];
                let mut in_range = true;
                for (k, slot) in window.iter_mut().enumerate() {
                    let rr = r + dr * k as i32;
                    let cc = c + dc * k as i32;
                    if !Pos::is_valid(rr, cc) {
                        in_range = false;
                        break;
                    }
                    *slot = Pos::new(rr as u8, cc as u8);
                }
                if !in_range {
                    continue;
                }

                let vals = window.map(|p| board.get(p));
                let gap = match vals {
                    [Cell::Empty, a, b, c] if [a, b, c] == [opponent; 3] => Some(window[0]),
                    [a, b, c, Cell::Empty] if [a, b, c] == [opponent; 3] => Some(window[3]),
                    [a, b, Cell::Empty, c] if [a, b, c] == [opponent; 3] => Some(window[2]),
                    [a, Cell::Empty, b, c] if [a, b, c] == [opponent; 3] => Some(window[1]),
                    _ => None,
                };
                if let Some(pos) = gap {
                    blocks.push(pos);
                }
            }
        }
    }

    blocks.sort();
    blocks.dedup();
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_three_both_ends() {
        let mut board = Board::new();
        for c in 5..8 {
            board.set(Pos::new(7, c), Cell::Black);
        }
        let blocks = find_three_threats(&board, Cell::Black);
        assert!(blocks.contains(&Pos::new(7, 4)));
        assert!(blocks.contains(&Pos::new(7, 8)));
    }

    #[test]
    fn test_jump_three_gap() {
        let mut board = Board::new();
        // X X _ X
        board.set(Pos::new(7, 5), Cell::Black);
        board.set(Pos::new(7, 6), Cell::Black);
        board.set(Pos::new(7, 8), Cell::Black);
        let blocks = find_three_threats(&board, Cell::Black);
        assert!(blocks.contains(&Pos::new(7, 7)));

        // X _ X X
        let mut board = Board::new();
        board.set(Pos::new(4, 2), Cell::White);
        board.set(Pos::new(4, 4), Cell::White);
        board.set(Pos::new(4, 5), Cell::White);
        let blocks = find_three_threats(&board, Cell::White);
        assert!(blocks.contains(&Pos::new(4, 3)));
    }

    #[test]
    fn test_vertical_and_diagonal_windows() {
        let mut board = Board::new();
        for r in 3..6 {
            board.set(Pos::new(r, 9), Cell::White);
        }
        let blocks = find_three_threats(&board, Cell::White);
        assert!(blocks.contains(&Pos::new(2, 9)));
        assert!(blocks.contains(&Pos::new(6, 9)));

        let mut board = Board::new();
        for i in 0..3 {
            board.set(Pos::new(10 - i, 4 + i), Cell::Black);
        }
        let blocks = find_three_threats(&board, Cell::Black);
        assert!(blocks.contains(&Pos::new(11, 3)));
        assert!(blocks.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_wrong_color_ignored() {
        let mut board = Board::new();
        for c in 5..8 {
            board.set(Pos::new(7, c), Cell::Black);
        }
        assert!(find_three_threats(&board, Cell::White).is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let mut board = Board::new();
        // Two triples sharing a gap cell
        board.set(Pos::new(7, 5), Cell::Black);
        board.set(Pos::new(7, 6), Cell::Black);
        board.set(Pos::new(7, 8), Cell::Black);
        board.set(Pos::new(7, 9), Cell::Black);
        let blocks = find_three_threats(&board, Cell::Black);
        let mut deduped = blocks.clone();
        deduped.dedup();
        assert_eq!(blocks, deduped);
        assert!(blocks.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_window_truncated_at_edge() {
        let mut board = Board::new();
        // Triple hugging the right edge: only the left gap is on the board
        for c in 12..15 {
            board.set(Pos::new(0, c), Cell::Black);
        }
        let blocks = find_three_threats(&board, Cell::Black);
        assert_eq!(blocks, vec![Pos::new(0, 11)]);
    }
}
