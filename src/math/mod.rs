//! Mathematical utilities for the sampler

/// Probability distributions and statistical functions
pub mod probability;
