//! Password generation settings.
//!
//! Collected fresh from the prompts on every loop iteration; nothing is
//! persisted between iterations or runs.

/// Length substituted when the length prompt cannot be parsed.
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
    pub require_each: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            digits: true,
            special: true,
            require_each: false,
        }
    }
}
