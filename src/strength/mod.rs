//! Password strength estimation.

mod entropy;
mod search_space;

pub use entropy::shannon_entropy;
pub use search_space::{brute_force_years, search_space};
