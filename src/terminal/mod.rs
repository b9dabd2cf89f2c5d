//! Shared terminal utilities.
//!
//! Box drawing, number formatting, and ANSI helpers.

mod output;

pub use output::*;
