//! Per-block randomness for the creation phase
//!
//! Every 2×2 block gets an independent draw keyed by `(seed, order, corner)`
//! rather than a position in a shared generator stream. Draws therefore
//! cannot correlate across blocks and the sampled tiling is identical under
//! any block evaluation order, sequential or parallel.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::vertical_probability;
use crate::spatial::Cell;

/// Finalizing mixer from `SplitMix64`; decorrelates nearby block keys
const fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Splittable random source for block orientation draws
///
/// Stateless between draws: each block's variate is a pure function of the
/// master seed and the block's coordinates.
#[derive(Debug, Clone, Copy)]
pub struct OrientationSource {
    seed: u64,
    p_vertical: f64,
}

impl OrientationSource {
    /// Unweighted source: both orientations with probability exactly 1/2
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            p_vertical: 0.5,
        }
    }

    /// Weighted source biasing vertical against horizontal pairs
    ///
    /// A block becomes a vertical pair with probability
    /// `vertical_weight / (vertical_weight + horizontal_weight)`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error unless both weights are finite and
    /// strictly positive.
    pub fn with_weights(seed: u64, vertical_weight: f64, horizontal_weight: f64) -> Result<Self> {
        for (name, weight) in [
            ("vertical_weight", vertical_weight),
            ("horizontal_weight", horizontal_weight),
        ] {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(invalid_parameter(
                    name,
                    &weight,
                    &"orientation weights must be finite and positive",
                ));
            }
        }
        Ok(Self {
            seed,
            p_vertical: vertical_probability(vertical_weight, horizontal_weight),
        })
    }

    /// The master seed this source derives all draws from
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Probability that a block is filled with a vertical pair
    pub const fn p_vertical(&self) -> f64 {
        self.p_vertical
    }

    /// Decide the orientation of the block with the given southwest corner
    ///
    /// `true` selects the vertical (West beside East) pair.
    pub fn draw_vertical(&self, order: u32, corner: Cell) -> bool {
        let key = mix(
            self.seed
                ^ mix((u64::from(order) << 42) ^ (lane(corner.x) << 21) ^ lane(corner.y)),
        );
        let mut rng = StdRng::seed_from_u64(key);
        rng.random::<f64>() < self.p_vertical
    }
}

/// Pack a signed coordinate into a 21-bit lane of the block key
const fn lane(coordinate: i32) -> u64 {
    (coordinate as u64) & 0x1f_ffff
}
