//! Named animation speeds.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;

/// Delay between animation units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    /// 0.1 seconds per unit
    Slow,
    /// 0.05 seconds per unit
    #[default]
    Normal,
    /// 0.01 seconds per unit
    Fast,
}

impl Speed {
    /// Every speed, slowest first.
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Normal, Speed::Fast];

    /// Name used on the command line and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }

    /// Pause after each written unit.
    pub fn delay(&self) -> Duration {
        match self {
            Self::Slow => Duration::from_millis(100),
            Self::Normal => Duration::from_millis(50),
            Self::Fast => Duration::from_millis(10),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Speed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|sp| sp.name() == s).ok_or_else(|| {
            let valid: Vec<&str> = Self::ALL.iter().map(|sp| sp.name()).collect();
            Error::invalid_input(format!(
                "Invalid speed '{}'. Valid: {}",
                s,
                valid.join(", ")
            ))
        })
    }
}
