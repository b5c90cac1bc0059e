//! Line resolver and per-direction grid plumbing.
//!
//! A line is the 4 cells of one row or column read in the direction of
//! travel, so index 3 is always the leading end (the end tiles slide
//! toward). The resolver is direction-agnostic; `line_cells` maps each
//! direction onto grid coordinates so all four moves share one algorithm.

use super::state::Move;

pub(crate) type Line = [u8; 4];

/// Slide all four lines of `cells` in `direction` and merge, in place.
/// Returns whether any cell changed.
pub(crate) fn apply_move(cells: &mut [u8; 16], direction: Move) -> bool {
    let before = *cells;
    for line_idx in 0..4 {
        let coords = line_cells(direction, line_idx);
        let line = coords.map(|(row, col)| cells[row * 4 + col]);
        let resolved = operate(line);
        for (k, &(row, col)) in coords.iter().enumerate() {
            cells[row * 4 + col] = resolved[k];
        }
    }
    *cells != before
}

/// Grid coordinates of line `line_idx` for `direction`, in travel order:
/// element 3 is the cell the move pushes toward.
fn line_cells(direction: Move, line_idx: usize) -> [(usize, usize); 4] {
    let mut coords = [(0, 0); 4];
    for (k, coord) in coords.iter_mut().enumerate() {
        *coord = match direction {
            Move::Right => (line_idx, k),
            Move::Left => (line_idx, 3 - k),
            Move::Down => (k, line_idx),
            Move::Up => (3 - k, line_idx),
        };
    }
    coords
}

/// One full move step on a line: slide, merge once, close the gap.
///
/// The second slide is what prevents double merges: a freshly merged
/// tile moves but is never paired again within the same move.
pub(crate) fn operate(line: Line) -> Line {
    slide(combine(slide(line)))
}

/// Push non-zero values flush against the leading end, preserving order.
fn slide(line: Line) -> Line {
    let mut out = [0u8; 4];
    let mut idx = 4;
    for &val in line.iter().rev() {
        if val != 0 {
            idx -= 1;
            out[idx] = val;
        }
    }
    out
}

/// Merge equal adjacent pairs, scanning from the trailing end inward.
///
/// The scan order matters: with three equal tiles in a row, the pair
/// nearest the leading end merges. Each index is visited once, so a cell
/// zeroed by one merge cannot feed another in the same pass.
fn combine(mut line: Line) -> Line {
    for i in (1..4).rev() {
        if line[i] != 0 && line[i] == line[i - 1] {
            // The exponent ceiling is u8::MAX; a merge there saturates
            // rather than wrapping to an empty cell.
            line[i] = line[i].saturating_add(1);
            line[i - 1] = 0;
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::super::state::Board;
    use super::*;

    #[test]
    fn it_slides_toward_the_leading_end() {
        assert_eq!(slide([0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(slide([0, 2, 0, 3]), [0, 0, 2, 3]);
        assert_eq!(slide([1, 0, 0, 0]), [0, 0, 0, 1]);
        assert_eq!(slide([1, 2, 3, 4]), [1, 2, 3, 4]);
        assert_eq!(slide([4, 0, 4, 0]), [0, 0, 4, 4]);
    }

    #[test]
    fn it_combines_trailing_end_inward() {
        // Rightmost pair of three-in-a-row merges first.
        assert_eq!(combine([0, 2, 2, 2]), [0, 2, 0, 3]);
        assert_eq!(combine([1, 1, 1, 1]), [0, 2, 0, 2]);
        assert_eq!(combine([1, 2, 1, 2]), [1, 2, 1, 2]);
        assert_eq!(combine([0, 0, 3, 3]), [0, 0, 0, 4]);
    }

    #[test]
    fn it_operates_slide_combine_slide() {
        assert_eq!(operate([0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(operate([1, 2, 1, 2]), [1, 2, 1, 2]);
        assert_eq!(operate([1, 1, 2, 2]), [0, 0, 2, 3]);
        assert_eq!(operate([5, 0, 0, 5]), [0, 0, 0, 6]);
        assert_eq!(operate([0, 2, 2, 2]), [0, 0, 2, 3]);
        assert_eq!(operate([0, 2, 0, 3]), [0, 0, 2, 3]);
    }

    #[test]
    fn it_merges_each_pair_at_most_once() {
        // Four equal tiles become two, never one.
        assert_eq!(operate([1, 1, 1, 1]), [0, 0, 2, 2]);
        // A merged tile does not merge again with its neighbor.
        assert_eq!(operate([2, 1, 1, 0]), [0, 0, 2, 2]);
    }

    #[test]
    fn it_saturates_merges_at_the_exponent_ceiling() {
        assert_eq!(operate([0, 0, u8::MAX, u8::MAX]), [0, 0, 0, u8::MAX]);
        assert_eq!(combine([u8::MAX, u8::MAX, 1, 1]), [0, u8::MAX, 0, 2]);
    }

    #[test]
    fn it_reports_noop_lines_unchanged() {
        assert_eq!(operate([1, 2, 3, 4]), [1, 2, 3, 4]);
    }

    #[test]
    fn apply_move_right_uses_rows_as_is() {
        let mut board = Board::new();
        board.set(0, 0, 1);
        board.set(0, 1, 1);
        assert!(board.apply_move(Move::Right));
        assert_eq!(board.get(0, 3), 2);
        assert_eq!(board.get(0, 0), 0);
    }

    #[test]
    fn apply_move_left_reverses_rows() {
        let mut board = Board::new();
        board.set(1, 2, 3);
        board.set(1, 3, 3);
        assert!(board.apply_move(Move::Left));
        assert_eq!(board.get(1, 0), 4);
        assert_eq!(board.get(1, 3), 0);
    }

    #[test]
    fn apply_move_up_runs_columns_bottom_to_top() {
        let mut board = Board::new();
        board.set(2, 1, 2);
        board.set(3, 1, 2);
        assert!(board.apply_move(Move::Up));
        assert_eq!(board.get(0, 1), 3);
        assert_eq!(board.get(2, 1), 0);
        assert_eq!(board.get(3, 1), 0);
    }

    #[test]
    fn apply_move_down_runs_columns_top_to_bottom() {
        // Three equal tiles in a column: the pair nearest the bottom merges.
        let mut board = Board::new();
        board.set(0, 2, 1);
        board.set(1, 2, 1);
        board.set(2, 2, 1);
        assert!(board.apply_move(Move::Down));
        assert_eq!(board.get(3, 2), 2);
        assert_eq!(board.get(2, 2), 1);
        assert_eq!(board.get(1, 2), 0);
        assert_eq!(board.get(0, 2), 0);
    }

    #[test]
    fn apply_move_reports_false_when_nothing_moves() {
        let mut board = Board::new();
        board.set(0, 3, 1);
        board.set(1, 3, 2);
        board.set(2, 3, 3);
        board.set(3, 3, 4);
        assert!(!board.apply_move(Move::Right));
    }

    #[test]
    fn apply_move_never_increases_tile_count() {
        let mut board = Board::new();
        for row in 0..4 {
            for col in 0..4 {
                board.set(row, col, ((row + col) % 3) as u8);
            }
        }
        for direction in Move::ALL {
            let mut moved = board;
            let before = 16 - moved.count_empty();
            moved.apply_move(direction);
            assert!(16 - moved.count_empty() <= before);
        }
    }
}
