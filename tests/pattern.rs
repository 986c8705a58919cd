//! Validates pattern construction, contents round-trips and the geometric
//! read/write/compare/contains operations

use sigilgrid::{Pattern, PatternError, WILDCARD};

fn pattern(height: usize, width: usize, contents: &str) -> Pattern {
    match Pattern::from_contents(height, width, contents) {
        Ok(pattern) => pattern,
        Err(error) => unreachable!("pattern construction failed: {error}"),
    }
}

fn score(grid: &Pattern, other: &Pattern, row: usize, col: usize) -> usize {
    match grid.compare(other, row, col) {
        Ok(similarity) => similarity,
        Err(error) => unreachable!("compare failed: {error}"),
    }
}

fn found(grid: &Pattern, needle: &Pattern) -> bool {
    match grid.contains(needle) {
        Ok(found) => found,
        Err(error) => unreachable!("contains failed: {error}"),
    }
}

#[test]
fn test_new_rejects_zero_dimensions() {
    match Pattern::new(0, 4) {
        Err(PatternError::InvalidDimension { dimension, value }) => {
            assert_eq!(dimension, "height");
            assert_eq!(value, 0);
        }
        other => unreachable!("expected an invalid-dimension error, got {other:?}"),
    }
    assert!(Pattern::new(4, 0).is_err(), "zero width should be rejected");
}

#[test]
fn test_new_initializes_to_wildcards() {
    let Ok(grid) = Pattern::new(2, 3) else {
        unreachable!("2x3 construction should succeed");
    };
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.get_contents(), "------");
    assert_eq!(grid.sigil_count(), 0, "a fresh pattern has no sigils");
}

#[test]
fn test_contents_round_trip() {
    let mut grid = pattern(2, 2, "----");
    assert!(grid.set_contents("ab-d").is_ok());
    assert_eq!(grid.get_contents(), "ab-d");
    assert_eq!(grid.get(0, 1), Some('b'));
    assert_eq!(grid.get(1, 0), Some(WILDCARD));
    assert_eq!(grid.get(2, 0), None, "reads outside the grid return None");
}

#[test]
fn test_contents_accept_an_unbounded_alphabet() {
    let grid = pattern(1, 3, "λ☃-");
    assert_eq!(grid.get(0, 0), Some('λ'));
    assert_eq!(grid.sigil_count(), 2);
    assert_eq!(grid.get_contents(), "λ☃-");
}

#[test]
fn test_set_contents_rejects_length_mismatch() {
    let mut grid = pattern(2, 2, "----");
    match grid.set_contents("abc") {
        Err(PatternError::ContentsLength { expected, actual }) => {
            assert_eq!(expected, 4);
            assert_eq!(actual, 3);
        }
        other => unreachable!("expected a contents-length error, got {other:?}"),
    }
    assert_eq!(
        grid.get_contents(),
        "----",
        "a rejected write leaves contents unchanged"
    );
}

#[test]
fn test_sigil_count_ignores_wildcards_only() {
    assert_eq!(pattern(2, 2, "ab-d").sigil_count(), 3);
    assert_eq!(pattern(2, 2, "----").sigil_count(), 0);
    assert_eq!(pattern(2, 2, "abcd").sigil_count(), 4);
}

#[test]
fn test_read_extracts_sub_rectangle() {
    let grid = pattern(2, 2, "ab-d");
    let Ok(row) = grid.read(0..=0, 0..=1) else {
        unreachable!("in-bounds read should succeed");
    };
    assert_eq!(row.height(), 1);
    assert_eq!(row.width(), 2);
    assert_eq!(row.get_contents(), "ab");
}

#[test]
fn test_read_unbounded_ends_reach_the_edge() {
    let grid = pattern(3, 3, "abcdefghi");
    let Ok(full) = grid.read(.., ..) else {
        unreachable!("full read should succeed");
    };
    assert_eq!(full, grid);

    let Ok(lower_right) = grid.read(1.., 1..) else {
        unreachable!("suffix read should succeed");
    };
    assert_eq!(lower_right.get_contents(), "efhi");

    let Ok(top) = grid.read(..1, ..) else {
        unreachable!("prefix read should succeed");
    };
    assert_eq!(top.get_contents(), "abc");
}

#[test]
fn test_read_result_is_independent_of_the_source() {
    let mut grid = pattern(3, 3, "abcdefghi");
    let Ok(window) = grid.read(0..=1, 0..=1) else {
        unreachable!("in-bounds read should succeed");
    };
    let stamp = pattern(1, 1, "z");
    assert!(grid.write(&stamp, 0, 0).is_ok());
    assert_eq!(
        window.get_contents(),
        "abde",
        "mutating the source must not affect an extracted window"
    );
}

#[test]
fn test_read_rejects_empty_regions() {
    let grid = pattern(3, 3, "abcdefghi");
    match grid.read(2..=1, ..) {
        Err(PatternError::EmptyRegion { axis, min, max }) => {
            assert_eq!(axis, "row");
            assert_eq!(min, 2);
            assert_eq!(max, 1);
        }
        other => unreachable!("expected an empty-region error, got {other:?}"),
    }
    assert!(
        grid.read(.., 1..=0).is_err(),
        "empty column region should be rejected"
    );
}

#[test]
fn test_read_rejects_out_of_bounds_regions() {
    let grid = pattern(3, 3, "abcdefghi");
    match grid.read(0..=3, ..) {
        Err(PatternError::RegionOutOfBounds { axis, max, limit }) => {
            assert_eq!(axis, "row");
            assert_eq!(max, 3);
            assert_eq!(limit, 3);
        }
        other => unreachable!("expected an out-of-bounds error, got {other:?}"),
    }
    assert!(
        grid.read(.., 0..=3).is_err(),
        "column overflow should be rejected"
    );
}

#[test]
fn test_read_checks_rows_before_columns() {
    let grid = pattern(2, 2, "ab-d");
    match grid.read(0..=5, 1..=0) {
        Err(PatternError::RegionOutOfBounds { axis, .. }) => assert_eq!(axis, "row"),
        other => unreachable!("expected the row violation to surface first, got {other:?}"),
    }
}

#[test]
fn test_write_overlays_at_offset() {
    let mut grid = pattern(3, 3, "---------");
    let stamp = pattern(2, 2, "abcd");
    assert!(grid.write(&stamp, 1, 1).is_ok());
    assert_eq!(grid.get_contents(), "----ab-cd");
}

#[test]
fn test_write_copies_wildcards_unconditionally() {
    let mut grid = pattern(2, 2, "abcd");
    let stamp = pattern(1, 2, "-z");
    assert!(grid.write(&stamp, 0, 0).is_ok());
    assert_eq!(
        grid.get_contents(),
        "-zcd",
        "a write is not masked: wildcard cells overwrite too"
    );
}

#[test]
fn test_write_then_read_back_round_trips() {
    let mut grid = pattern(4, 4, "----------------");
    let stamp = pattern(2, 3, "abcdef");
    assert!(grid.write(&stamp, 1, 0).is_ok());
    let Ok(window) = grid.read(1..=2, 0..=2) else {
        unreachable!("in-bounds read should succeed");
    };
    assert_eq!(window, stamp);
}

#[test]
fn test_write_rejects_overflow_by_one() {
    let mut grid = pattern(3, 3, "---------");
    let stamp = pattern(2, 2, "abcd");
    match grid.write(&stamp, 2, 0) {
        Err(PatternError::OverlayOutOfBounds {
            axis,
            patch,
            base,
            offset,
        }) => {
            assert_eq!(axis, "height");
            assert_eq!(patch, 2);
            assert_eq!(base, 3);
            assert_eq!(offset, 2);
        }
        other => unreachable!("expected an overlay-bounds error, got {other:?}"),
    }
    assert!(
        grid.write(&stamp, 0, 2).is_err(),
        "width overflow should be rejected"
    );
    assert_eq!(
        grid.get_contents(),
        "---------",
        "a rejected write changes nothing"
    );
}

#[test]
fn test_compare_counts_matching_sigils() {
    let grid = pattern(2, 2, "ab-d");
    let single = pattern(1, 1, "a");
    assert_eq!(score(&grid, &single, 0, 0), 1);
    assert_eq!(score(&grid, &single, 0, 1), 0);
    assert_eq!(score(&grid, &single, 1, 1), 0);
}

#[test]
fn test_compare_never_scores_wildcards() {
    let grid = pattern(2, 2, "ab-d");
    let wildcard = pattern(1, 1, "-");
    // Offset (1, 0) pairs the wildcard with the receiver's own wildcard cell
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        assert_eq!(
            score(&grid, &wildcard, row, col),
            0,
            "wildcards must not score at ({row}, {col})"
        );
    }
}

#[test]
fn test_compare_reaches_sigil_count_only_on_full_mask_match() {
    let grid = pattern(3, 3, "abcdefghi");
    let masked = pattern(2, 2, "e-h-");
    assert_eq!(masked.sigil_count(), 2);
    assert_eq!(
        score(&grid, &masked, 1, 1),
        2,
        "both sigils line up at (1, 1)"
    );
    assert_eq!(score(&grid, &masked, 0, 0), 0);
}

#[test]
fn test_compare_rejects_out_of_bounds_offsets() {
    let grid = pattern(2, 2, "ab-d");
    let single = pattern(1, 1, "a");
    assert!(grid.compare(&single, 2, 0).is_err());
    assert!(grid.compare(&single, 0, 2).is_err());
}

#[test]
fn test_contains_finds_an_embedded_pattern() {
    let mut grid = pattern(5, 5, &"-".repeat(25));
    let stamp = pattern(2, 2, "abcd");
    assert!(grid.write(&stamp, 2, 3).is_ok());
    assert!(found(&grid, &stamp));
}

#[test]
fn test_contains_reports_absence() {
    let grid = pattern(3, 3, "abcdefghi");
    let needle = pattern(1, 2, "zz");
    assert!(!found(&grid, &needle));
}

#[test]
fn test_contains_masks_needle_wildcards() {
    let grid = pattern(3, 3, "abcdefghi");
    let masked = pattern(1, 3, "d-f");
    assert!(
        found(&grid, &masked),
        "wildcard cells match anything underneath"
    );
}

#[test]
fn test_contains_is_trivially_true_for_an_all_wildcard_needle() {
    let grid = pattern(2, 2, "ab-d");
    let blank = pattern(2, 2, "----");
    assert_eq!(blank.sigil_count(), 0);
    assert!(
        found(&grid, &blank),
        "a zero threshold is satisfied by any window"
    );
}

#[test]
fn test_contains_matches_an_equal_sized_pattern() {
    let grid = pattern(2, 2, "ab-d");
    let copy = pattern(2, 2, "ab-d");
    assert!(found(&grid, &copy));
}

#[test]
fn test_contains_rejects_an_oversized_needle() {
    let grid = pattern(2, 2, "ab-d");
    let tall = pattern(3, 1, "abc");
    match grid.contains(&tall) {
        Err(PatternError::SubPatternTooLarge { axis, sub, base }) => {
            assert_eq!(axis, "height");
            assert_eq!(sub, 3);
            assert_eq!(base, 2);
        }
        other => unreachable!("expected a sub-pattern-size error, got {other:?}"),
    }
}

#[test]
fn test_display_joins_rows_with_newlines() {
    let grid = pattern(2, 2, "ab-d");
    assert_eq!(grid.to_string(), "ab\n-d");
}
