//! Line-oriented prompt helpers.

use std::io;

use crate::settings::DEFAULT_LENGTH;
use crate::terminal;

/// Print a prompt and read one trimmed line from stdin.
/// A closed stdin ends the session cleanly (exit code 0).
pub fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    terminal::flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => {}
    }
    input.trim().to_string()
}

/// Prompt for the password length. Input that does not parse falls back to
/// [`DEFAULT_LENGTH`] with a warning rather than failing the session.
pub fn read_length(prompt: &str) -> usize {
    match parse_length(&read_line(prompt)) {
        Some(length) => length,
        None => {
            terminal::print_warn(&format!(
                "Invalid length. Using a default value of {DEFAULT_LENGTH}."
            ));
            DEFAULT_LENGTH
        }
    }
}

/// Prompt for a yes/no answer; unrecognized input falls back to `default`.
pub fn read_bool(prompt: &str, default: bool) -> bool {
    parse_bool(&read_line(prompt)).unwrap_or(default)
}

fn parse_length(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_lengths() {
        assert_eq!(parse_length("16"), Some(16));
        assert_eq!(parse_length("  12 "), Some(12));
        assert_eq!(parse_length("0"), Some(0));
    }

    #[test]
    fn rejects_non_integer_lengths() {
        assert_eq!(parse_length("abc"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("12.5"), None);
        assert_eq!(parse_length("-5"), None);
    }

    #[test]
    fn parses_yes_no_answers() {
        assert_eq!(parse_bool("y"), Some(true));
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("n"), Some(false));
        assert_eq!(parse_bool("No"), Some(false));
    }

    #[test]
    fn unrecognized_answers_defer_to_default() {
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("maybe"), None);
        assert!(parse_bool("garbage").unwrap_or(true));
        assert!(!parse_bool("garbage").unwrap_or(false));
    }
}
