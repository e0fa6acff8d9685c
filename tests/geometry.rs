//! Validates diamond geometry, parity coloring, and coverage masks

use dominoshuffle::spatial::{Cell, Color, Coverage, CoverageMask, Diamond, Direction};

#[test]
fn diamond_area_matches_closed_form() {
    for order in 0..=6u32 {
        let diamond = Diamond::new(order);
        let expected = 2 * order as usize * (order as usize + 1);
        assert_eq!(diamond.cell_count(), expected);
        assert_eq!(diamond.cells().count(), expected, "order {order}");
    }
}

#[test]
fn small_orders_match_known_areas() {
    assert_eq!(Diamond::new(0).cell_count(), 0);
    assert_eq!(Diamond::new(1).cell_count(), 4);
    assert_eq!(Diamond::new(2).cell_count(), 12);
    assert_eq!(Diamond::new(3).cell_count(), 24);
}

#[test]
fn cell_enumeration_is_idempotent() {
    let diamond = Diamond::new(4);
    let first: Vec<Cell> = diamond.cells().collect();
    let second: Vec<Cell> = diamond.cells().collect();
    assert_eq!(first, second);
}

#[test]
fn enumerated_cells_are_members_and_boundary_is_tight() {
    let diamond = Diamond::new(3);
    for cell in diamond.cells() {
        assert!(diamond.contains(cell), "{cell} should be inside");
    }
    // One step beyond each row end leaves the diamond
    for y in -3..3 {
        let (lo, hi) = diamond.row_span(y).unwrap();
        assert!(!diamond.contains(Cell::new(lo - 1, y)));
        assert!(!diamond.contains(Cell::new(hi + 1, y)));
    }
}

#[test]
fn order_one_diamond_is_the_central_square() {
    let cells: Vec<Cell> = Diamond::new(1).cells().collect();
    assert_eq!(
        cells,
        vec![
            Cell::new(-1, -1),
            Cell::new(0, -1),
            Cell::new(-1, 0),
            Cell::new(0, 0),
        ]
    );
}

#[test]
fn color_is_parity_and_stable() {
    assert_eq!(Cell::new(0, 0).color(), Color::Black);
    assert_eq!(Cell::new(1, 0).color(), Color::White);
    assert_eq!(Cell::new(-1, 0).color(), Color::White);
    assert_eq!(Cell::new(-1, -1).color(), Color::Black);
    assert!(Cell::new(2, -2).is_black());

    // Color never depends on any diamond order
    let cell = Cell::new(3, -4);
    let before = cell.color();
    let _ = Diamond::new(7);
    assert_eq!(cell.color(), before);
}

#[test]
fn neighbors_invert_under_opposite_directions() {
    let cell = Cell::new(2, -3);
    for direction in Direction::ALL {
        let there = cell.neighbor(direction);
        assert_eq!(there.neighbor(direction.opposite()), cell);
        // Lattice adjacency always flips parity
        assert_ne!(there.color(), cell.color());
    }
}

#[test]
fn mask_indexing_round_trips() {
    let mask = CoverageMask::new(3);
    for (expected_index, cell) in Diamond::new(3).cells().enumerate() {
        assert_eq!(mask.index(cell), Some(expected_index));
        assert_eq!(mask.cell_at(expected_index), Some(cell));
    }
    assert_eq!(mask.index(Cell::new(3, 3)), None);
}

#[test]
fn mask_tracks_coverage_and_duplicates() {
    let mut mask = CoverageMask::new(2);
    let diamond = Diamond::new(2);

    assert_eq!(mask.uncovered_count(), diamond.cell_count());
    for cell in diamond.cells() {
        assert_eq!(mask.cover(cell), Coverage::Fresh);
    }
    assert_eq!(mask.uncovered_count(), 0);
    assert_eq!(mask.first_uncovered(), None);

    assert_eq!(mask.cover(Cell::new(0, 0)), Coverage::Duplicate);
    assert_eq!(mask.cover(Cell::new(5, 5)), Coverage::Outside);
}
