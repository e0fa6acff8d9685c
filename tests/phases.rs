//! Exercises the three shuffle phases individually through the public API

use dominoshuffle::algorithm::creation::fill_holes;
use dominoshuffle::algorithm::deletion::remove_colliding_pairs;
use dominoshuffle::algorithm::randomness::OrientationSource;
use dominoshuffle::algorithm::sliding::slide;
use dominoshuffle::algorithm::tiling::Tiling;
use dominoshuffle::spatial::{Cell, Diamond, Direction};
use dominoshuffle::{DominoShuffler, ShuffleError};

#[test]
fn deletion_removes_facing_horizontal_pair() {
    // North domino on the central block's bottom row, South directly above
    let mut tiling = Tiling::with_dominoes(
        2,
        [
            (Cell::new(-1, -1), Direction::North),
            (Cell::new(0, 0), Direction::South),
        ],
    )
    .unwrap();

    let removed = remove_colliding_pairs(&mut tiling);
    assert_eq!(removed, 1);
    assert!(tiling.is_empty());
}

#[test]
fn deletion_removes_facing_vertical_pair() {
    // East domino on the central block's left column, West directly right
    let mut tiling = Tiling::with_dominoes(
        2,
        [
            (Cell::new(-1, -1), Direction::East),
            (Cell::new(0, 0), Direction::West),
        ],
    )
    .unwrap();

    let removed = remove_colliding_pairs(&mut tiling);
    assert_eq!(removed, 1);
    assert!(tiling.is_empty());
}

#[test]
fn deletion_spares_pairs_sliding_apart() {
    // South on the west edge, North on the east edge: no collision course
    let mut tiling = Tiling::with_dominoes(
        2,
        [
            (Cell::new(-1, -1), Direction::South),
            (Cell::new(0, 0), Direction::North),
        ],
    )
    .unwrap();

    let removed = remove_colliding_pairs(&mut tiling);
    assert_eq!(removed, 0);
    assert_eq!(tiling.domino_count(), 2);
}

#[test]
fn deletion_spares_lone_dominoes() {
    let mut tiling = Tiling::with_dominoes(2, [(Cell::new(-1, -1), Direction::North)]).unwrap();
    assert_eq!(remove_colliding_pairs(&mut tiling), 0);
    assert_eq!(tiling.domino_count(), 1);
}

#[test]
fn deletion_result_after_first_cycle_is_untouched() {
    // A freshly created order-1 tiling always points apart
    let mut shuffler = DominoShuffler::new(11);
    shuffler.shuffle_step().unwrap();
    let mut tiling = shuffler.tiling().clone();

    assert_eq!(remove_colliding_pairs(&mut tiling), 0);
    assert_eq!(tiling.domino_count(), 2);
}

#[test]
fn sliding_preserves_count_and_stays_inside_grown_diamond() {
    let mut shuffler = DominoShuffler::new(23);
    shuffler.run_to(5).unwrap();
    let mut tiling = shuffler.tiling().clone();

    remove_colliding_pairs(&mut tiling);
    let survivors = tiling.domino_count();
    let slid = slide(&tiling).unwrap();

    assert_eq!(slid.order(), 6);
    assert_eq!(slid.domino_count(), survivors);

    let grown = Diamond::new(6);
    for domino in slid.dominoes() {
        for cell in domino.cells {
            assert!(grown.contains(cell), "{cell} escaped the grown diamond");
        }
    }
}

#[test]
fn sliding_moves_each_domino_one_step() {
    let tiling = Tiling::with_dominoes(1, [(Cell::new(0, 0), Direction::North)]).unwrap();
    let slid = slide(&tiling).unwrap();

    // The top-row pair of the 2x2 square lands on the order-2 diamond's roof
    let domino = slid.dominoes().next().unwrap();
    assert_eq!(domino.direction, Direction::North);
    assert_eq!(domino.cells, [Cell::new(-1, 1), Cell::new(0, 1)]);
}

#[test]
fn creation_fills_the_empty_unit_diamond() {
    let mut tiling = Tiling::new(1);
    let source = OrientationSource::new(7);

    let blocks = fill_holes(&mut tiling, &source).unwrap();
    assert_eq!(blocks, 1);
    assert_eq!(tiling.domino_count(), 2);
    tiling.verify().unwrap();
}

#[test]
fn creation_is_deterministic_for_a_seed() {
    let source = OrientationSource::new(99);

    let mut first = Tiling::new(1);
    fill_holes(&mut first, &source).unwrap();
    let mut second = Tiling::new(1);
    fill_holes(&mut second, &source).unwrap();

    assert_eq!(first.canonical_form(), second.canonical_form());
}

#[test]
fn creation_rejects_a_malformed_hole() {
    // Only the top row of the 2x2 square is covered; the remaining hole is
    // a 1x2 strip, not a block
    let mut tiling = Tiling::with_dominoes(1, [(Cell::new(0, 0), Direction::North)]).unwrap();
    let source = OrientationSource::new(1);

    match fill_holes(&mut tiling, &source) {
        Err(ShuffleError::MalformedHole { order: 1, .. }) => {}
        other => unreachable!("Expected MalformedHole, got {other:?}"),
    }
}

#[test]
fn weighted_creation_follows_the_bias() {
    // Heavy vertical bias: nearly every unit diamond fills vertically
    let mut vertical_count = 0;
    for seed in 0..200 {
        let source = OrientationSource::with_weights(seed, 1e6, 1.0).unwrap();
        let mut tiling = Tiling::new(1);
        fill_holes(&mut tiling, &source).unwrap();
        if tiling.direction_at(Cell::new(-1, -1)) == Some(Direction::West) {
            vertical_count += 1;
        }
    }
    assert!(vertical_count >= 198, "saw {vertical_count} vertical fills");
}

#[test]
fn orientation_weights_must_be_positive_and_finite() {
    assert!(OrientationSource::with_weights(0, 0.0, 1.0).is_err());
    assert!(OrientationSource::with_weights(0, 1.0, -2.0).is_err());
    assert!(OrientationSource::with_weights(0, f64::NAN, 1.0).is_err());
    assert!(OrientationSource::with_weights(0, 1.0, f64::INFINITY).is_err());
    assert!(OrientationSource::with_weights(0, 2.0, 3.0).is_ok());
}
