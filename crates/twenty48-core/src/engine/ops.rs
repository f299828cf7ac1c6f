use super::state::{Cells, Grid, Move, MoveOutcome, GRID_SIZE};

/// Slide and merge tiles in `direction`.
///
/// Pure and deterministic: identical inputs always produce identical
/// outcomes, and nothing outside the returned value changes. The pass
/// reduces every direction to a canonical leftward sweep: rotate the grid
/// so `direction` aligns with left, compress each row, merge equal adjacent
/// pairs once, compress again, rotate back.
///
/// `moved` is decided by comparing the final grid against the input grid
/// cell for cell, never from the intermediate rotated form, so rotation by
/// itself can never count as a move.
pub fn apply_move(grid: Grid, direction: Move) -> MoveOutcome {
    let (forward, inverse) = direction.turns();
    let mut cells = rotate(*grid.rows(), forward);
    let mut gained: u64 = 0;
    for row in cells.iter_mut() {
        *row = compress_row(*row);
        gained += merge_row(row);
        *row = compress_row(*row);
    }
    let result = Grid(rotate(cells, inverse));
    let moved = result != grid;
    // An unchanged grid cannot have produced a merge.
    debug_assert!(moved || gained == 0);
    MoveOutcome {
        grid: result,
        moved,
        score_gained: gained,
    }
}

/// True if any move can still change the grid: an empty cell exists, or two
/// horizontally or vertically adjacent cells hold the same value. Exact:
/// when this returns false, all four directions yield `moved == false`.
pub fn has_legal_move(grid: &Grid) -> bool {
    let cells = grid.rows();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if cells[r][c] == 0 {
                return true;
            }
            if c + 1 < GRID_SIZE && cells[r][c] == cells[r][c + 1] {
                return true;
            }
            if r + 1 < GRID_SIZE && cells[r][c] == cells[r + 1][c] {
                return true;
            }
        }
    }
    false
}

/// Rotate the cells counterclockwise by `turns` quarter-turns.
fn rotate(cells: Cells, turns: usize) -> Cells {
    let mut out = cells;
    for _ in 0..turns % 4 {
        out = rotate_ccw(out);
    }
    out
}

fn rotate_ccw(cells: Cells) -> Cells {
    let mut out = [[0; GRID_SIZE]; GRID_SIZE];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = cells[c][GRID_SIZE - 1 - r];
        }
    }
    out
}

/// Drop zeros and pack the remaining values to the left, preserving order.
fn compress_row(row: [u32; GRID_SIZE]) -> [u32; GRID_SIZE] {
    let mut out = [0; GRID_SIZE];
    let mut next = 0;
    for v in row {
        if v != 0 {
            out[next] = v;
            next += 1;
        }
    }
    out
}

/// Single left-to-right merge pass over a compressed row. Each pair merges
/// at most once: the doubled cell is never re-examined in the same pass, so
/// `[2, 2, 4, 0]` becomes `[4, 0, 4, 0]`, not `[8, ...]`. Returns the sum
/// of newly created tile values.
fn merge_row(row: &mut [u32; GRID_SIZE]) -> u64 {
    let mut gained: u64 = 0;
    for i in 0..GRID_SIZE - 1 {
        if row[i] != 0 && row[i] == row[i + 1] {
            row[i] *= 2;
            row[i + 1] = 0;
            gained += u64::from(row[i]);
        }
    }
    gained
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Cells) -> Grid {
        Grid::from_rows(rows)
    }

    // A full grid with no equal neighbors in any row or column.
    fn terminal_grid() -> Grid {
        grid([
            [2, 4, 8, 16],
            [4, 8, 16, 32],
            [2, 4, 8, 16],
            [4, 8, 16, 32],
        ])
    }

    #[test]
    fn it_compress_row() {
        assert_eq!(compress_row([0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(compress_row([0, 2, 0, 4]), [2, 4, 0, 0]);
        assert_eq!(compress_row([2, 4, 8, 16]), [2, 4, 8, 16]);
        assert_eq!(compress_row([0, 0, 0, 2]), [2, 0, 0, 0]);
    }

    #[test]
    fn it_merge_row_single_pass() {
        let mut row = [2, 2, 0, 0];
        assert_eq!(merge_row(&mut row), 4);
        assert_eq!(row, [4, 0, 0, 0]);

        // No chaining: the freshly doubled 4 does not merge with the next 4.
        let mut row = [2, 2, 4, 0];
        assert_eq!(merge_row(&mut row), 4);
        assert_eq!(row, [4, 0, 4, 0]);

        // Two independent pairs both merge in one pass.
        let mut row = [2, 2, 4, 4];
        assert_eq!(merge_row(&mut row), 12);
        assert_eq!(row, [4, 0, 8, 0]);

        let mut row = [2, 4, 8, 16];
        assert_eq!(merge_row(&mut row), 0);
        assert_eq!(row, [2, 4, 8, 16]);
    }

    #[test]
    fn it_rotation_round_trip() {
        let cells = [
            [2, 4, 8, 16],
            [0, 2, 0, 4],
            [32, 0, 0, 2],
            [0, 0, 2, 64],
        ];
        for mv in Move::ALL {
            let (forward, inverse) = mv.turns();
            assert_eq!(rotate(rotate(cells, forward), inverse), cells, "{mv:?}");
        }
    }

    #[test]
    fn test_move_left_merges_pair() {
        let outcome = grid([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .apply_move(Move::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 4);
        assert_eq!(outcome.grid.rows()[0], [4, 0, 0, 0]);
    }

    #[test]
    fn test_move_left_no_chain_after_compress() {
        // [2,0,2,2] compresses to [2,2,2,0]; the leftmost pair merges and
        // the third 2 may not chain onto the new 4 in the same pass.
        let outcome = grid([
            [2, 0, 2, 2],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .apply_move(Move::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 4);
        assert_eq!(outcome.grid.rows()[0], [4, 2, 0, 0]);
    }

    #[test]
    fn test_move_left_noop() {
        let input = grid([
            [2, 4, 8, 16],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let outcome = input.apply_move(Move::Left);
        assert!(!outcome.moved);
        assert_eq!(outcome.score_gained, 0);
        assert_eq!(outcome.grid, input);
    }

    #[test]
    fn test_move_up_packs_toward_top() {
        let outcome = grid([
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [4, 0, 0, 0],
        ])
        .apply_move(Move::Up);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 4);
        let expected = grid([
            [4, 0, 0, 0],
            [4, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        assert_eq!(outcome.grid, expected);
    }

    #[test]
    fn test_move_down_packs_toward_bottom() {
        let outcome = grid([
            [2, 0, 0, 0],
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [4, 0, 0, 0],
        ])
        .apply_move(Move::Down);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 4);
        let expected = grid([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [4, 0, 0, 0],
            [4, 0, 0, 0],
        ]);
        assert_eq!(outcome.grid, expected);
    }

    #[test]
    fn test_move_right_reverses_merge_order() {
        // Rightward pass scans from the right edge, so [2,2,2,0] keeps the
        // lone 2 on the left: [0,0,2,4].
        let outcome = grid([
            [2, 2, 2, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .apply_move(Move::Right);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 4);
        assert_eq!(outcome.grid.rows()[0], [0, 0, 2, 4]);
    }

    #[test]
    fn test_compression_alone_counts_as_moved() {
        let outcome = grid([
            [0, 2, 4, 8],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .apply_move(Move::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 0);
        assert_eq!(outcome.grid.rows()[0], [2, 4, 8, 0]);
    }

    #[test]
    fn test_rotation_is_not_a_move() {
        // Vertically packed with no vertical pairs: Up must be a no-op even
        // though the grid passes through two rotations.
        let input = terminal_grid();
        for mv in Move::ALL {
            let outcome = input.apply_move(mv);
            assert!(!outcome.moved, "{mv:?}");
            assert_eq!(outcome.grid, input, "{mv:?}");
            assert_eq!(outcome.score_gained, 0, "{mv:?}");
        }
    }

    #[test]
    fn test_tile_sum_is_conserved() {
        let sum = |g: &Grid| g.rows().iter().flatten().map(|&v| u64::from(v)).sum::<u64>();
        let inputs = [
            grid([
                [2, 2, 4, 4],
                [0, 2, 0, 2],
                [8, 8, 8, 8],
                [2, 4, 2, 4],
            ]),
            grid([
                [16, 0, 16, 0],
                [0, 32, 0, 32],
                [2, 0, 0, 2],
                [0, 0, 0, 0],
            ]),
            Grid::EMPTY,
        ];
        for input in inputs {
            for mv in Move::ALL {
                let outcome = input.apply_move(mv);
                assert_eq!(sum(&outcome.grid), sum(&input), "{mv:?}");
            }
        }
    }

    #[test]
    fn test_score_equals_sum_of_merged_tiles() {
        // Row 0 makes a 4 and an 8, row 2 makes two 16s: 4 + 8 + 32 total.
        let outcome = grid([
            [2, 2, 4, 4],
            [0, 0, 0, 0],
            [8, 8, 8, 8],
            [2, 4, 8, 16],
        ])
        .apply_move(Move::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_gained, 4 + 8 + 16 + 16);
    }

    #[test]
    fn it_has_legal_move_on_empty_cell() {
        let mut cells = *terminal_grid().rows();
        cells[2][1] = 0;
        assert!(has_legal_move(&Grid::from_rows(cells)));
        assert!(has_legal_move(&Grid::EMPTY));
    }

    #[test]
    fn it_has_legal_move_on_adjacent_pairs() {
        let mut cells = *terminal_grid().rows();
        cells[0][1] = cells[0][0]; // horizontal pair
        assert!(has_legal_move(&Grid::from_rows(cells)));

        let mut cells = *terminal_grid().rows();
        cells[1][3] = cells[0][3]; // vertical pair
        assert!(has_legal_move(&Grid::from_rows(cells)));
    }

    #[test]
    fn it_terminal_grid_has_no_legal_move() {
        let input = terminal_grid();
        assert!(!has_legal_move(&input));
        for mv in Move::ALL {
            assert!(!input.apply_move(mv).moved, "{mv:?}");
        }
    }
}
