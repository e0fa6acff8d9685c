/// Probability that a 2×2 block is filled with a vertical pair
///
/// Derived from the pair weights as `w_v / (w_v + w_h)`; equal weights give
/// exactly 1/2, the unweighted case required for uniform sampling.
pub fn vertical_probability(vertical_weight: f64, horizontal_weight: f64) -> f64 {
    vertical_weight / (vertical_weight + horizontal_weight)
}

/// Pearson chi-squared statistic of observed counts against expectations
///
/// Used by the distribution tests to compare tabulated tiling frequencies
/// with the uniform law; categories with zero expectation are skipped.
pub fn chi_squared_statistic(observed: &[usize], expected: &[f64]) -> f64 {
    observed
        .iter()
        .zip(expected)
        .filter(|&(_, &e)| e > 0.0)
        .map(|(&o, &e)| {
            let d = o as f64 - e;
            d * d / e
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_weights_are_a_fair_coin() {
        assert!((vertical_probability(1.0, 1.0) - 0.5).abs() < f64::EPSILON);
        assert!((vertical_probability(3.0, 1.0) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn chi_squared_is_zero_on_exact_match() {
        let stat = chi_squared_statistic(&[5, 5, 10], &[5.0, 5.0, 10.0]);
        assert!(stat.abs() < f64::EPSILON);
    }

    #[test]
    fn chi_squared_grows_with_deviation() {
        let near = chi_squared_statistic(&[9, 11], &[10.0, 10.0]);
        let far = chi_squared_statistic(&[2, 18], &[10.0, 10.0]);
        assert!(far > near);
    }
}
