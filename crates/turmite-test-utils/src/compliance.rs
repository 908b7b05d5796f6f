//! Grid trait compliance helpers.
//!
//! These functions verify that a [`Grid`] implementation satisfies the
//! trait contract the engine relies on. Reused across every backend's
//! tests (`Grid2D`, `SparseGrid`, `RecordingGrid`).

use turmite_core::{Color, Grid, Position, StepError};

/// Positions just outside each edge and corner of `grid`.
fn outside(grid: &dyn Grid) -> Vec<Position> {
    let w = i64::from(grid.width());
    let h = i64::from(grid.height());
    vec![
        Position::new(-1, 0),
        Position::new(0, -1),
        Position::new(w, 0),
        Position::new(0, h),
        Position::new(-1, -1),
        Position::new(w, h),
        Position::new(w - 1, h),
        Position::new(w, h - 1),
    ]
}

/// Assert that `contains` is exactly `0 <= x < width && 0 <= y < height`
/// and agrees with whether `read` succeeds.
pub fn assert_contains_matches_read(grid: &dyn Grid) {
    for y in -1..=i64::from(grid.height()) {
        for x in -1..=i64::from(grid.width()) {
            let pos = Position::new(x, y);
            let inside =
                x >= 0 && y >= 0 && x < i64::from(grid.width()) && y < i64::from(grid.height());
            assert_eq!(grid.contains(pos), inside, "contains({pos})");
            assert_eq!(grid.read(pos).is_ok(), inside, "read({pos})");
        }
    }
}

/// Assert that out-of-bounds reads and writes fail with `OffGrid`
/// naming the position, and that a rejected write changes nothing.
pub fn assert_off_grid_rejected(grid: &mut dyn Grid) {
    let before: Vec<Color> = cells(grid);
    for pos in outside(grid) {
        assert_eq!(grid.read(pos), Err(StepError::OffGrid { position: pos }));
        assert_eq!(
            grid.write(pos, Color::rgb(1, 2, 3)),
            Err(StepError::OffGrid { position: pos })
        );
    }
    assert_eq!(cells(grid), before, "rejected writes modified the grid");
}

/// Assert that a write is visible to the next read of that cell and of
/// no other cell.
pub fn assert_write_then_read(grid: &mut dyn Grid) {
    let marker = Color::rgb(0x12, 0x34, 0x56);
    grid.fill(Color::WHITE);
    let corner = Position::new(i64::from(grid.width()) - 1, i64::from(grid.height()) - 1);
    for pos in [Position::new(0, 0), corner] {
        grid.write(pos, marker).unwrap();
        assert_eq!(grid.read(pos), Ok(marker), "read({pos}) after write");
    }
    let painted = cells(grid).iter().filter(|c| **c == marker).count();
    let expected = if corner == Position::new(0, 0) { 1 } else { 2 };
    assert_eq!(painted, expected);
}

/// Assert that `fill` paints every in-bounds cell.
pub fn assert_fill_covers_all(grid: &mut dyn Grid) {
    grid.write(Position::new(0, 0), Color::rgb(9, 9, 9)).unwrap();
    grid.fill(Color::BLACK);
    assert!(cells(grid).iter().all(|c| *c == Color::BLACK));
}

/// Every in-bounds cell, row-major.
fn cells(grid: &dyn Grid) -> Vec<Color> {
    let mut out = Vec::new();
    for y in 0..i64::from(grid.height()) {
        for x in 0..i64::from(grid.width()) {
            out.push(grid.read(Position::new(x, y)).unwrap());
        }
    }
    out
}

/// Run every compliance check.
pub fn run_full_compliance(grid: &mut dyn Grid) {
    assert_contains_matches_read(grid);
    assert_off_grid_rejected(grid);
    assert_write_then_read(grid);
    assert_fill_covers_all(grid);
}
