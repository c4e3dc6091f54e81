//! Exact draw-without-replacement probabilities.
//!
//! Parameters follow the usual naming: `population` is the deck size,
//! `successes` the number of cards of interest in it, `draws` the hand size
//! and `target` the number of successes wanted in the hand.

/// Binomial coefficient C(n, k) as f64
///
/// Exact integer arithmetic while it fits in u128, which covers every
/// realistic deck size; falls back to a floating product beyond that.
pub fn choose(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);

    let mut exact: u128 = 1;
    for i in 0..k {
        match exact.checked_mul((n - i) as u128) {
            Some(product) => exact = product / (i as u128 + 1),
            None => return choose_float(n, k),
        }
    }
    exact as f64
}

fn choose_float(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Probability of drawing exactly `target` successes
///
/// Structurally impossible draws return 0.0 rather than an error.
pub fn hypergeometric(population: usize, successes: usize, draws: usize, target: usize) -> f64 {
    if target > successes || target > draws {
        return 0.0;
    }
    if successes > population || draws - target > population - successes {
        return 0.0;
    }

    let denominator = choose(population, draws);
    if denominator == 0.0 {
        return 0.0;
    }
    choose(successes, target) * choose(population - successes, draws - target) / denominator
}

/// Probability of drawing `min_target` or more successes
pub fn at_least(population: usize, successes: usize, draws: usize, min_target: usize) -> f64 {
    let max_target = successes.min(draws);
    if min_target > max_target {
        return 0.0;
    }
    (min_target..=max_target)
        .map(|k| hypergeometric(population, successes, draws, k))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_choose_small_values() {
        assert_eq!(choose(5, 0), 1.0);
        assert_eq!(choose(5, 2), 10.0);
        assert_eq!(choose(40, 5), 658_008.0);
        assert_eq!(choose(3, 4), 0.0);
        assert_eq!(choose(0, 0), 1.0);
    }

    #[test]
    fn test_choose_large_values_stay_finite() {
        let c = choose(200, 100);
        assert!(c.is_finite());
        assert!((c / 9.054_851_465_610_328e58 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_hypergeometric_known() {
        // C(3,1) * C(37,4) / C(40,5)
        let expected = 3.0 * 66_045.0 / 658_008.0;
        let got = hypergeometric(40, 3, 5, 1);
        assert!((got - expected).abs() < EPS);
    }

    #[test]
    fn test_hypergeometric_impossible_targets() {
        assert_eq!(hypergeometric(40, 2, 5, 3), 0.0);
        assert_eq!(hypergeometric(40, 10, 5, 6), 0.0);
        // 38 of 40 are successes, so a 5-card hand has at least 3 of them
        assert_eq!(hypergeometric(40, 38, 5, 2), 0.0);
        // deck smaller than the hand
        assert_eq!(hypergeometric(3, 1, 5, 1), 0.0);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        for population in [1usize, 5, 10, 40, 60] {
            for successes in 0..=population {
                for draws in 0..=population.min(7) {
                    let total: f64 = (0..=draws)
                        .map(|k| hypergeometric(population, successes, draws, k))
                        .sum();
                    assert!(
                        (total - 1.0).abs() < 1e-9,
                        "N={} K={} n={} summed to {}",
                        population,
                        successes,
                        draws,
                        total
                    );
                }
            }
        }
    }

    #[test]
    fn test_at_least_zero_is_certain() {
        for successes in 0..=40 {
            assert!((at_least(40, successes, 5, 0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_at_least_one_is_complement_of_none() {
        let got = at_least(40, 3, 5, 1);
        let expected = 1.0 - hypergeometric(40, 3, 5, 0);
        assert!((got - expected).abs() < EPS);
    }

    #[test]
    fn test_at_least_empty_range() {
        assert_eq!(at_least(40, 2, 5, 3), 0.0);
        assert_eq!(at_least(40, 10, 5, 6), 0.0);
    }
}
