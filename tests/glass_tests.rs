//! Glass tests - locking and row clearing through the facade

use glassfall::core::{positions_overlap, Cell, Figure, Glass};
use glassfall::types::{ShapeKind, GLASS_WIDTH};

fn fill_row(glass: &mut Glass, row: i8) {
    for x in 0..GLASS_WIDTH as i8 {
        assert!(glass.insert(Cell::new(x, row, 0)));
    }
}

#[test]
fn lock_transfers_figure_cells() {
    let mut glass = Glass::new();
    let fig = Figure::new(3, 17, ShapeKind::O, 2, 0);

    assert!(glass.lock(&fig));
    assert_eq!(glass.cells().len(), 4);
    assert!(glass.occupied(3, 17));
    assert!(glass.occupied(4, 18));
    // Color travels with the cell.
    assert!(glass.cells().iter().all(|c| c.color == 2));
}

#[test]
fn lock_collision_leaves_glass_unchanged() {
    let mut glass = Glass::new();
    assert!(glass.insert(Cell::new(3, 17, 0)));

    let fig = Figure::new(3, 17, ShapeKind::O, 1, 0);
    assert!(!glass.lock(&fig));
    assert_eq!(glass.cells().len(), 1);
}

#[test]
fn cleared_row_five_shifts_cell_from_two_to_three() {
    let mut glass = Glass::new();
    fill_row(&mut glass, 5);
    assert!(glass.insert(Cell::new(3, 2, 1)));

    assert_eq!(glass.clear_full_rows(), 1);

    // Row 5 is gone; the cell that was at (3, 2) now sits at (3, 3).
    assert!(!glass.row_full(5));
    assert!(glass.occupied(3, 3));
    assert!(!glass.occupied(3, 2));
}

#[test]
fn stacked_full_rows_clear_together() {
    let mut glass = Glass::new();
    fill_row(&mut glass, 4);
    fill_row(&mut glass, 5);

    assert_eq!(glass.clear_full_rows(), 2);
    assert!(glass.cells().is_empty());
}

#[test]
fn partial_rows_survive_a_clear() {
    let mut glass = Glass::new();
    fill_row(&mut glass, 19);
    assert!(glass.insert(Cell::new(0, 18, 1)));
    assert!(glass.insert(Cell::new(9, 17, 2)));

    assert_eq!(glass.clear_full_rows(), 1);
    assert_eq!(glass.cells().len(), 2);
    assert!(glass.occupied(0, 19));
    assert!(glass.occupied(9, 18));
}

#[test]
fn empty_glass_clears_nothing() {
    let mut glass = Glass::new();
    assert_eq!(glass.clear_full_rows(), 0);
}

#[test]
fn locked_positions_remain_unique() {
    let mut glass = Glass::new();
    assert!(glass.lock(&Figure::new(0, 18, ShapeKind::O, 0, 0)));
    assert!(glass.lock(&Figure::new(4, 18, ShapeKind::O, 1, 0)));
    fill_row(&mut glass, 8);
    glass.clear_full_rows();

    let cells = glass.cells();
    for (i, a) in cells.iter().enumerate() {
        assert!(
            !positions_overlap(&[*a], &cells[i + 1..]),
            "duplicate at {:?}",
            a.pos()
        );
    }
}

#[test]
fn overlap_queries_see_locked_cells() {
    let mut glass = Glass::new();
    assert!(glass.insert(Cell::new(5, 5, 0)));

    assert!(glass.overlaps(&[Cell::new(5, 5, 2)]));
    assert!(!glass.overlaps(&[Cell::new(5, 6, 0)]));
}
