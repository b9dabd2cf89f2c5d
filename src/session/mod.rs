//! Interactive session loop.
//!
//! Collects generation settings from the prompts, generates a password,
//! reports its strength, and repeats until the user types `exit`.

mod banner;
mod prompts;

use num_traits::Zero;
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::pass::{self, charset};
use crate::settings::Settings;
use crate::strength;
use crate::terminal::{self, format_years};

/// Run the interactive loop until the user exits. Exit code is 0.
pub fn run() {
    banner::print();
    let mut rng = OsRng;

    loop {
        let settings = collect();
        report(&mut rng, &settings);

        let choice = prompts::read_line(
            "\nPress enter to generate a new password or type 'exit' to close the program: ",
        );
        if choice.eq_ignore_ascii_case("exit") {
            break;
        }
    }
}

/// Collecting phase: prompt for length and character classes. Invalid input
/// never aborts the session; each prompt has a fallback default.
fn collect() -> Settings {
    let pass_length = prompts::read_length(
        "Enter the password length (12-16 characters minimum is recommended): ",
    );

    Settings {
        pass_length,
        lowercase: prompts::read_bool("Include lowercase letters (a-z)? (y/n): ", true),
        uppercase: prompts::read_bool("Include uppercase letters (A-Z)? (y/n): ", true),
        digits: prompts::read_bool("Include numbers (0-9)? (y/n): ", true),
        special: prompts::read_bool("Include special characters? (y/n): ", true),
        require_each: prompts::read_bool(
            "Require at least one of each chosen category? (y/n): ",
            false,
        ),
    }
}

/// Reporting phase: generate one password and print it with its metrics.
/// Generation errors are displayed and the loop moves on to the exit prompt.
fn report(rng: &mut OsRng, settings: &Settings) {
    match pass::generate(rng, settings) {
        Ok(mut password) => {
            println!("\nGenerated Password: {password}");

            let entropy = strength::shannon_entropy(&password);
            let space = strength::search_space(charset::size(settings), settings.pass_length);
            password.zeroize();

            println!("Entropy: {entropy:.2} bits");
            println!("Search Space Size: {space}");

            if !space.is_zero() {
                let years = strength::brute_force_years(&space);
                println!("Approx. time to brute force at 1 trillion guesses/s:");
                println!(" - {} years", format_years(years));
            }
        }
        Err(err) => terminal::print_error(&format!("\nError: {err}")),
    }
}
