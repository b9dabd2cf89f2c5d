//! Password generation.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use super::charset;
use crate::settings::Settings;

#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    InvalidLength,
    NoClassesSelected,
    TooShort { length: usize, classes: usize },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::InvalidLength => {
                write!(f, "Password length must be at least 1.")
            }
            GenerateError::NoClassesSelected => {
                write!(
                    f,
                    "No character types selected. At least one type must be chosen."
                )
            }
            GenerateError::TooShort { length, classes } => {
                write!(
                    f,
                    "Password length ({length}) is too short to include at least one \
                     char from each of the {classes} selected categories."
                )
            }
        }
    }
}

/// Generate a single password based on settings.
///
/// Every draw comes from the caller's CSPRNG. The result is exactly
/// `pass_length` characters, contains no two equal adjacent characters, and
/// (with `require_each`) at least one character from each selected class.
pub fn generate<R: Rng + CryptoRng>(
    rng: &mut R,
    settings: &Settings,
) -> Result<String, GenerateError> {
    if settings.pass_length < 1 {
        return Err(GenerateError::InvalidLength);
    }

    let pools = charset::pools(settings);
    if pools.is_empty() {
        return Err(GenerateError::NoClassesSelected);
    }

    if settings.require_each && settings.pass_length < pools.len() {
        return Err(GenerateError::TooShort {
            length: settings.pass_length,
            classes: pools.len(),
        });
    }

    let alphabet = charset::build(settings);
    let mut chars = assemble(rng, settings, &pools, &alphabet);

    // The assembled sequence has no adjacent repeats (class representatives
    // come from disjoint pools, the fill loop rejects repeats), so a valid
    // permutation exists and re-shuffling terminates.
    loop {
        chars.shuffle(rng);
        if no_adjacent_repeats(&chars) {
            break;
        }
    }

    // Safety: charset is all ASCII
    Ok(unsafe { String::from_utf8_unchecked(chars) })
}

/// Seed one representative per selected pool (if required), then fill with
/// uniform alphabet draws, redrawing any candidate equal to the last
/// appended character.
fn assemble<R: Rng + CryptoRng>(
    rng: &mut R,
    settings: &Settings,
    pools: &[&'static [u8]],
    alphabet: &[u8],
) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(settings.pass_length);

    if settings.require_each {
        for pool in pools {
            chars.push(pool[rng.gen_range(0..pool.len())]);
        }
    }

    while chars.len() < settings.pass_length {
        let candidate = alphabet[rng.gen_range(0..alphabet.len())];
        if chars.last() != Some(&candidate) {
            chars.push(candidate);
        }
    }

    chars
}

fn no_adjacent_repeats(chars: &[u8]) -> bool {
    chars.windows(2).all(|pair| pair[0] != pair[1])
}
