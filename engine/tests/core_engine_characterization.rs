// engine/tests/core_engine_characterization.rs
#![forbid(unsafe_code)]

/**
 * Core engine characterization tests.
 *
 * Purpose:
 * - Lock in the observable heights and error messages that reference outputs depend on.
 * - Catch behavioral regressions in settling, row clearing and the height convention.
 *
 * What is tested:
 * - Reference lines and their heights.
 * - Exact grid contents after a few hand-checked lines.
 * - The non-empty-row height convention versus the floor-to-top span.
 * - Error taxonomy and message text for overflow, out-of-bounds and unknown shapes.
 */
use stack_engine::{
    Board, EngineError, H, Kind, LineOutcome, W, empty_grid, parse_line, process_line,
    process_lines,
};

fn bottom(b: &Board, n: usize) -> Vec<String> {
    b.grid[H - n..]
        .iter()
        .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
        .collect()
}

fn board_for(line: &str) -> Board {
    let mut b = Board::new();
    for cmd in parse_line(line).unwrap() {
        b.drop_piece(cmd.kind, cmd.col).unwrap();
    }
    b
}

#[test]
fn reference_lines_produce_reference_heights() {
    let cases = [
        ("I0,I4,Q8", 1),
        ("I0,L2,T4", 4),
        ("Q0,I2,I6,I0,I6,I6,Q2,Q4", 3),
        ("Q0,Q0,Q0,Q0,Q0", 10),
        ("T1,Z3,I4", 4),
    ];
    for (line, height) in cases {
        assert_eq!(process_line(line).unwrap().height, height, "{line}");
    }
}

#[test]
fn square_at_column_zero_sits_on_the_floor() {
    let mut b = Board::new();
    let r = b.drop_piece(Kind::Q, 0).unwrap();
    assert_eq!(r.row, H - 2);

    let mut expected = empty_grid();
    expected[H - 2][0] = true;
    expected[H - 2][1] = true;
    expected[H - 1][0] = true;
    expected[H - 1][1] = true;
    assert_eq!(b.grid, expected);
}

#[test]
fn cleared_line_leaves_only_the_square_top() {
    let b = board_for("I0,I4,Q8");
    assert_eq!(bottom(&b, 2), vec!["..........", "........##"]);
    assert_eq!(b.rows_cleared, 1);
}

#[test]
fn mixed_line_grid_snapshot() {
    let b = board_for("T1,Z3,I4");
    assert_eq!(
        bottom(&b, 4),
        vec!["....####..", "...##.....", ".#####....", "..#......."]
    );
}

#[test]
fn interleaved_clears_snapshot() {
    let b = board_for("Q0,I2,I6,I0,I6,I6,Q2,Q4");
    assert_eq!(
        bottom(&b, 3),
        vec!["..##......", "..##......", "##..######"]
    );
}

#[test]
fn height_counts_non_empty_rows_not_span() {
    let mut b = Board::new();
    b.grid[0][0] = true;
    b.grid[2][0] = true;
    assert_eq!(b.height(), 2);
    assert_eq!(b.top_span(), H as u32);
    assert_eq!(b.height(), b.height());
}

#[test]
fn overflow_message_matches_reference() {
    let line = vec!["Q0"; 20000].join(",");
    let err = process_line(&line).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot place piece [(0, 0), (0, 1), (1, 0), (1, 1)] at row -1, column 0"
    );
}

#[test]
fn out_of_bounds_message_matches_reference() {
    let err = process_line("Q25").unwrap_err();
    assert_eq!(err, EngineError::OutOfBounds { kind: Kind::Q, col: 25 });
    assert_eq!(
        err.to_string(),
        "Piece [(0, 0), (0, 1), (1, 0), (1, 1)] at column 25 goes out of bounds"
    );
}

#[test]
fn unknown_shape_message_matches_reference() {
    let err = process_line("H0").unwrap_err();
    assert_eq!(err.to_string(), "Unknown piece: H");
}

#[test]
fn widest_valid_column_per_shape_is_accepted() {
    for &kind in Kind::all() {
        let (_h, w) = stack_engine::extent(kind);
        let col = W - w as usize;
        let mut b = Board::new();
        assert!(b.drop_piece(kind, col).is_ok(), "{kind:?} at {col}");
        assert!(matches!(
            b.drop_piece(kind, col + 1),
            Err(EngineError::OutOfBounds { .. })
        ));
    }
}

#[test]
fn lines_are_independent() {
    let lines = ["Q0,Q0,Q0,Q0,Q0", "I0,I4,Q8", "Q0,Q0,Q0,Q0,Q0"];
    let out: Vec<LineOutcome> = process_lines(&lines, false)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(out[0], out[2]);
    assert_eq!(out[1].height, 1);
}
