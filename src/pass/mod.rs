//! Password generation.

pub mod charset;
mod generate;

pub use generate::generate;
pub use generate::GenerateError;
