use crate::constants::DEFAULT_TOLERANCE;
use crate::error::AppError;

use std::path::PathBuf;

/// Distance from pure white (255) within which a channel counts as
/// background. A `u8` keeps it inside 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance(u8);

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance(DEFAULT_TOLERANCE);

    pub const fn new(value: u8) -> Self {
        Tolerance(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Channels must be strictly above this to be treated as white.
    pub fn threshold(self) -> u8 {
        u8::MAX - self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::DEFAULT
    }
}

impl TryFrom<i64> for Tolerance {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Tolerance)
            .map_err(|_| AppError::InvalidTolerance(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tolerance: Tolerance,
}

#[derive(Debug)]
pub struct AppConfig {
    pub jobs: Vec<Job>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_225() {
        assert_eq!(Tolerance::default().threshold(), 225);
    }

    #[test]
    fn threshold_bounds() {
        assert_eq!(Tolerance::new(0).threshold(), 255);
        assert_eq!(Tolerance::new(255).threshold(), 0);
    }

    #[test]
    fn out_of_range_tolerance_is_rejected() {
        assert!(matches!(
            Tolerance::try_from(256),
            Err(AppError::InvalidTolerance(256))
        ));
        assert!(matches!(
            Tolerance::try_from(-1),
            Err(AppError::InvalidTolerance(-1))
        ));
        assert_eq!(Tolerance::try_from(42).unwrap().value(), 42);
    }
}
