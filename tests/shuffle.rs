//! End-to-end tests for the shuffle driver

use dominoshuffle::spatial::{Cell, Diamond, Direction};
use dominoshuffle::{DominoShuffler, Phase, ShuffleError, run};

#[test]
fn order_zero_sample_is_the_empty_tiling() {
    let tiling = run(0, 5).unwrap();
    assert_eq!(tiling.order(), 0);
    assert!(tiling.is_empty());
    tiling.verify().unwrap();
}

#[test]
fn order_one_sample_is_one_of_the_two_unit_tilings() {
    let horizontal = [
        (Cell::new(-1, -1), Direction::South),
        (Cell::new(0, 0), Direction::North),
    ];
    let vertical = [
        (Cell::new(-1, -1), Direction::West),
        (Cell::new(0, 0), Direction::East),
    ];

    for seed in 0..16 {
        let tiling = run(1, seed).unwrap();
        let (_, pairs) = tiling.canonical_form();
        assert!(
            pairs == horizontal || pairs == vertical,
            "seed {seed} produced {pairs:?}"
        );
    }
}

#[test]
fn equal_seeds_produce_equal_tilings() {
    let first = run(12, 1234).unwrap();
    let second = run(12, 1234).unwrap();
    assert_eq!(first.canonical_form(), second.canonical_form());
}

#[test]
fn distinct_seeds_diverge() {
    // At order 12 two seeds agreeing on every block draw is implausible
    let first = run(12, 1).unwrap();
    let second = run(12, 2).unwrap();
    assert_ne!(first.canonical_form(), second.canonical_form());
}

#[test]
fn every_intermediate_order_is_a_complete_tiling() {
    let mut shuffler = DominoShuffler::new(77);
    for expected_order in 1..=8u32 {
        shuffler.shuffle_step().unwrap();
        let tiling = shuffler.tiling();

        assert_eq!(tiling.order(), expected_order);
        tiling.verify().unwrap();
        assert_eq!(
            2 * tiling.domino_count(),
            Diamond::new(expected_order).cell_count()
        );
    }
}

#[test]
fn driver_is_restartable_between_cycles() {
    let mut staged = DominoShuffler::new(31);
    staged.run_to(4).unwrap();
    staged.run_to(9).unwrap();

    let direct = run(9, 31).unwrap();
    assert_eq!(staged.tiling().canonical_form(), direct.canonical_form());
}

#[test]
fn observer_sees_the_three_phases_in_order() {
    let mut shuffler = DominoShuffler::new(3);
    shuffler.run_to(5).unwrap();

    let mut phases = Vec::new();
    shuffler
        .shuffle_step_with(|phase, tiling| {
            phases.push((phase, tiling.order(), tiling.domino_count()));
        })
        .unwrap();

    assert_eq!(phases.len(), 3);
    let (first, second, third) = (phases[0], phases[1], phases[2]);

    assert_eq!(first.0, Phase::Deletion);
    assert_eq!(first.1, 5);
    assert_eq!(second.0, Phase::Sliding);
    assert_eq!(second.1, 6);
    // Sliding neither creates nor destroys dominoes
    assert_eq!(second.2, first.2);
    assert_eq!(third.0, Phase::Creation);
    assert_eq!(third.1, 6);
    assert_eq!(2 * third.2, Diamond::new(6).cell_count());
}

#[test]
fn partial_phase_tilings_stay_inside_their_diamonds() {
    let mut shuffler = DominoShuffler::new(57);
    for _ in 0..7 {
        shuffler
            .shuffle_step_with(|_, tiling| {
                let diamond = tiling.diamond();
                for domino in tiling.dominoes() {
                    for cell in domino.cells {
                        assert!(diamond.contains(cell), "{cell} outside order {}", tiling.order());
                    }
                    assert!(domino.anchor.is_black());
                }
            })
            .unwrap();
    }
}

#[test]
fn targets_beyond_the_order_cap_are_rejected() {
    let mut shuffler = DominoShuffler::new(0);
    match shuffler.run_to(u32::MAX) {
        Err(ShuffleError::InvalidParameter { parameter, .. }) => {
            assert_eq!(parameter, "target_order");
        }
        other => unreachable!("Expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn targets_below_the_current_order_are_rejected() {
    let mut shuffler = DominoShuffler::new(0);
    shuffler.run_to(3).unwrap();
    assert!(shuffler.run_to(2).is_err());
    // The failed call leaves the driver untouched
    assert_eq!(shuffler.order(), 3);
    shuffler.run_to(3).unwrap();
}
