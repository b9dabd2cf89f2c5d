//! Character class pools and alphabet building.

use crate::settings::Settings;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = br"!@#$%^&*()-_=+[]{}|;:,.<>?/\";

/// List the selected class pools, in fixed class order.
pub fn pools(settings: &Settings) -> Vec<&'static [u8]> {
    let mut pools: Vec<&'static [u8]> = Vec::with_capacity(4);

    if settings.lowercase {
        pools.push(LOWERCASE);
    }
    if settings.uppercase {
        pools.push(UPPERCASE);
    }
    if settings.digits {
        pools.push(DIGITS);
    }
    if settings.special {
        pools.push(SPECIAL);
    }

    pools
}

/// Build the combined alphabet: the selected pools concatenated in order.
pub fn build(settings: &Settings) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::new();
    for pool in pools(settings) {
        chars.extend_from_slice(pool);
    }
    chars
}

/// Effective alphabet size (for the search-space calculation).
pub fn size(settings: &Settings) -> usize {
    let mut size = 0;
    if settings.lowercase {
        size += LOWERCASE.len();
    }
    if settings.uppercase {
        size += UPPERCASE.len();
    }
    if settings.digits {
        size += DIGITS.len();
    }
    if settings.special {
        size += SPECIAL.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_classes_give_ninety_symbols() {
        let settings = Settings::default();
        assert_eq!(size(&settings), 90);
        assert_eq!(build(&settings).len(), 90);
    }

    #[test]
    fn pool_sizes_are_fixed() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SPECIAL.len(), 28);
    }

    #[test]
    fn build_matches_pool_concatenation() {
        let settings = Settings {
            uppercase: false,
            special: false,
            ..Settings::default()
        };
        let mut expected = LOWERCASE.to_vec();
        expected.extend_from_slice(DIGITS);
        assert_eq!(build(&settings), expected);
        assert_eq!(size(&settings), 36);
        assert_eq!(pools(&settings), vec![LOWERCASE, DIGITS]);
    }

    #[test]
    fn no_classes_selected_is_empty() {
        let settings = Settings {
            lowercase: false,
            uppercase: false,
            digits: false,
            special: false,
            ..Settings::default()
        };
        assert!(pools(&settings).is_empty());
        assert!(build(&settings).is_empty());
        assert_eq!(size(&settings), 0);
    }
}
