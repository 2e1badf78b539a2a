//! Configuration for an animation run.

use super::mode::Mode;
use crate::error::Result;
use crate::speed::Speed;

/// Speed and unit mode for an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimatorConfig {
    /// Delay between units (default: normal)
    pub speed: Speed,
    /// Unit size (default: char)
    pub mode: Mode,
}

impl AnimatorConfig {
    /// Creates a config from typed values.
    pub fn new(speed: Speed, mode: Mode) -> Self {
        Self { speed, mode }
    }

    /// Creates a config from speed and mode names.
    ///
    /// The speed is checked first, so a call with two bad values reports
    /// the speed.
    pub fn from_names(speed: &str, mode: &str) -> Result<Self> {
        Ok(Self {
            speed: speed.parse()?,
            mode: mode.parse()?,
        })
    }
}
