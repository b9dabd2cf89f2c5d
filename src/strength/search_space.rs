//! Brute-force search-space estimation.

use num_bigint::BigUint;
use num_traits::{Pow, ToPrimitive, Zero};

/// Assumed brute-force speed: 1 trillion guesses per second.
pub const GUESSES_PER_SECOND: f64 = 1e12;

const SECONDS_PER_YEAR: f64 = 3600.0 * 24.0 * 365.0;

/// Total number of possible passwords of `length` characters over an
/// alphabet of `alphabet_size` symbols. Zero when either input is zero.
///
/// 90^12 already exceeds u64 range, hence the arbitrary-precision result.
pub fn search_space(alphabet_size: usize, length: usize) -> BigUint {
    if alphabet_size == 0 || length == 0 {
        return BigUint::zero();
    }
    BigUint::from(alphabet_size).pow(length)
}

/// Estimated years to exhaust the search space at [`GUESSES_PER_SECOND`].
/// Spaces beyond f64 range saturate to infinity.
pub fn brute_force_years(space: &BigUint) -> f64 {
    let seconds = space.to_f64().unwrap_or(f64::INFINITY) / GUESSES_PER_SECOND;
    seconds / SECONDS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_alphabet_or_length_is_zero() {
        assert!(search_space(0, 12).is_zero());
        assert!(search_space(90, 0).is_zero());
        assert!(search_space(0, 0).is_zero());
    }

    #[test]
    fn alphanumeric_eight_chars() {
        // 62^8 = 218,340,105,584,896
        assert_eq!(
            search_space(62, 8),
            BigUint::from(218_340_105_584_896u64)
        );
    }

    #[test]
    fn full_alphabet_exceeds_u64() {
        // 90^12 = 282,429,536,481 * 10^12
        let space = search_space(90, 12);
        assert!(space > BigUint::from(u64::MAX));
        assert_eq!(space.to_string(), "282429536481000000000000");
    }

    #[test]
    fn trivial_space() {
        assert_eq!(search_space(1, 5), BigUint::from(1u8));
    }

    #[test]
    fn one_second_of_guessing() {
        // 10^12 guesses take exactly one second
        let space = BigUint::from(10u8).pow(12usize);
        let years = brute_force_years(&space);
        assert!((years - 1.0 / SECONDS_PER_YEAR).abs() < 1e-18);
    }

    #[test]
    fn astronomical_space_saturates_to_infinity() {
        let space = search_space(90, 10_000);
        assert!(brute_force_years(&space).is_infinite());
    }
}
