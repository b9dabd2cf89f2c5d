//! Shannon entropy estimation.

use std::collections::HashMap;

/// Shannon entropy of the password's character-frequency distribution, in
/// bits. This measures the generated string itself, not the generation
/// process. Empty input yields 0.0.
pub fn shannon_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let length = password.chars().count() as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / length;
            -p * p.log2()
        })
        .sum()
}
