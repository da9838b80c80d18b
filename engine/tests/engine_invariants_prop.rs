// engine/tests/engine_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the grid engine.
 *
 * Invariants covered:
 * - Row clearing keeps the row count and the relative order of surviving rows.
 * - Drops never write outside the grid and keep shapes rigid.
 * - `can_place` and `height` are pure.
 * - Parallel and sequential line processing agree.
 */
use proptest::prelude::*;
use stack_engine::engine::{clear_lines_grid, fits_on_grid, occupied_rows};
use stack_engine::{Board, EngineError, Grid, H, Kind, W, empty_grid, extent, process_lines};

fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::all().to_vec())
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    // Mostly sparse rows with a fair share of full ones so clears actually happen.
    prop::collection::vec(
        prop_oneof![
            3 => Just([false; W]),
            2 => Just([true; W]),
            3 => prop::array::uniform10(any::<bool>()),
        ],
        H,
    )
    .prop_map(|rows| {
        let mut g = empty_grid();
        for (r, row) in rows.into_iter().enumerate() {
            g[r] = row;
        }
        g
    })
}

fn drops_strategy() -> impl Strategy<Value = Vec<(Kind, usize)>> {
    prop::collection::vec((kind_strategy(), 0usize..W), 1..120)
}

proptest! {
    #[test]
    fn clear_preserves_row_count_and_order(g in grid_strategy()) {
        let (out, cleared) = clear_lines_grid(&g);

        let survivors: Vec<[bool; W]> =
            g.iter().copied().filter(|row| !row.iter().all(|&c| c)).collect();
        prop_assert_eq!(survivors.len() + cleared as usize, H);

        // Survivors end up at the bottom in the same order; the top is backfilled empty.
        let offset = H - survivors.len();
        for r in 0..offset {
            prop_assert_eq!(out[r], [false; W]);
        }
        prop_assert_eq!(&out[offset..], &survivors[..]);
    }

    #[test]
    fn can_place_and_height_are_pure(
        g in grid_strategy(),
        kind in kind_strategy(),
        row in -5i32..(H as i32 + 5),
        col in -5i32..(W as i32 + 5),
    ) {
        let mut b = Board::new();
        b.grid = g;
        let before = b.grid;

        let _ = b.can_place(kind, row, col);
        let h1 = b.height();
        let h2 = b.height();

        prop_assert_eq!(b.grid, before);
        prop_assert_eq!(h1, h2);
        prop_assert_eq!(h1, occupied_rows(&before));
    }

    #[test]
    fn drops_stay_in_bounds_and_rigid(drops in drops_strategy()) {
        let mut b = Board::new();

        for (kind, col) in drops {
            let before = b.grid;
            let (_h, w) = extent(kind);

            match b.drop_piece(kind, col) {
                Ok(r) => {
                    // The locked cells are exactly the shape at (row, col) on the pre-drop grid.
                    prop_assert!(fits_on_grid(&before, kind, r.row as i32, col as i32));
                    let mut locked = before;
                    for &(dy, dx) in kind.cells() {
                        locked[r.row + dy as usize][col + dx as usize] = true;
                    }
                    let (expected, cleared) = clear_lines_grid(&locked);
                    prop_assert_eq!(b.grid, expected);
                    prop_assert_eq!(r.cleared_rows, cleared);

                    // Gravity: one row lower would not fit (floor or stack below).
                    prop_assert!(!fits_on_grid(&before, kind, r.row as i32 + 1, col as i32));
                }
                Err(EngineError::OutOfBounds { .. }) => {
                    prop_assert!(col + w as usize > W);
                    prop_assert_eq!(b.grid, before);
                }
                Err(EngineError::InvalidPlacement { row, .. }) => {
                    prop_assert_eq!(row, -1);
                    prop_assert_eq!(b.grid, before);
                    break;
                }
                Err(e) => prop_assert!(false, "unexpected error {e}"),
            }
        }
    }

    #[test]
    fn parallel_matches_sequential(drops in prop::collection::vec(drops_strategy(), 1..12)) {
        let lines: Vec<String> = drops
            .iter()
            .map(|line| {
                line.iter()
                    .map(|(k, c)| format!("{}{}", k.glyph(), c))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();

        prop_assert_eq!(process_lines(&lines, false), process_lines(&lines, true));
    }
}
