//! Shuffle driver: Delete → Slide → Create cycles from order 0 upward
//!
//! The driver owns the single `(order, Tiling)` pair that constitutes all
//! process state, mutates it only through the three phases in sequence, and
//! re-verifies the full tiling invariants after every completed cycle. Two
//! drivers built from the same seed produce identical tilings.

use crate::algorithm::creation::fill_holes;
use crate::algorithm::deletion::remove_colliding_pairs;
use crate::algorithm::randomness::OrientationSource;
use crate::algorithm::sliding::slide;
use crate::algorithm::tiling::Tiling;
use crate::io::configuration::MAX_ORDER;
use crate::io::error::{Result, invalid_parameter};

/// The phase a cycle observer is being shown the tiling after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Colliding pairs have been removed; same order, partial tiling
    Deletion,
    /// Survivors have moved into the grown diamond; partial tiling
    Sliding,
    /// Holes have been filled; next order, complete tiling
    Creation,
}

/// Driver producing a uniformly random tiling of a target-order diamond
#[derive(Debug, Clone)]
pub struct DominoShuffler {
    tiling: Tiling,
    source: OrientationSource,
}

impl DominoShuffler {
    /// A fresh driver at order 0 with unweighted orientation draws
    pub fn new(seed: u64) -> Self {
        Self::with_source(OrientationSource::new(seed))
    }

    /// A fresh driver at order 0 drawing from the given source
    pub fn with_source(source: OrientationSource) -> Self {
        Self {
            tiling: Tiling::initial(),
            source,
        }
    }

    /// Current diamond order
    pub const fn order(&self) -> u32 {
        self.tiling.order()
    }

    /// Current tiling, complete whenever no cycle is mid-flight
    pub const fn tiling(&self) -> &Tiling {
        &self.tiling
    }

    /// The orientation source used by the creation phase
    pub const fn source(&self) -> &OrientationSource {
        &self.source
    }

    /// Consume the driver, keeping the sampled tiling
    pub fn into_tiling(self) -> Tiling {
        self.tiling
    }

    /// Run one Delete → Slide → Create cycle, advancing the order by one
    ///
    /// # Errors
    ///
    /// Propagates fatal internal-consistency errors from the phases or from
    /// post-cycle verification; the run must be discarded, not resumed.
    pub fn shuffle_step(&mut self) -> Result<()> {
        self.shuffle_step_with(|_, _| {})
    }

    /// As [`Self::shuffle_step`], showing the tiling to an observer after
    /// each phase
    ///
    /// Lets animation and rendering collaborators watch intermediate states
    /// without the engine performing any I/O itself.
    ///
    /// # Errors
    ///
    /// Propagates fatal internal-consistency errors from the phases or from
    /// post-cycle verification.
    pub fn shuffle_step_with(
        &mut self,
        mut observer: impl FnMut(Phase, &Tiling),
    ) -> Result<()> {
        remove_colliding_pairs(&mut self.tiling);
        observer(Phase::Deletion, &self.tiling);

        self.tiling = slide(&self.tiling)?;
        observer(Phase::Sliding, &self.tiling);

        fill_holes(&mut self.tiling, &self.source)?;
        self.tiling.verify()?;
        observer(Phase::Creation, &self.tiling);
        Ok(())
    }

    /// Run cycles until the tiling reaches the target order
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error when the target exceeds
    /// [`MAX_ORDER`] or lies below the current order, and propagates any
    /// phase failure.
    pub fn run_to(&mut self, target_order: u32) -> Result<()> {
        if target_order > MAX_ORDER {
            return Err(invalid_parameter(
                "target_order",
                &target_order,
                &format!("orders above {MAX_ORDER} are not supported"),
            ));
        }
        if target_order < self.order() {
            return Err(invalid_parameter(
                "target_order",
                &target_order,
                &format!("driver has already reached order {}", self.order()),
            ));
        }
        while self.order() < target_order {
            self.shuffle_step()?;
        }
        Ok(())
    }
}

/// Sample one uniformly random tiling of `Diamond(target_order)`
///
/// Convenience wrapper running a fresh driver from order 0; a pure function
/// of `(target_order, seed)`.
///
/// # Errors
///
/// Returns an invalid-parameter error for targets above [`MAX_ORDER`] and
/// propagates fatal phase errors.
pub fn run(target_order: u32, seed: u64) -> Result<Tiling> {
    let mut shuffler = DominoShuffler::new(seed);
    shuffler.run_to(target_order)?;
    Ok(shuffler.into_tiling())
}
