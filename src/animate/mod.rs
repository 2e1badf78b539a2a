//! Typewriter animation driver.
//!
//! # Module Structure
//!
//! - [`config`] - Speed and mode for a run
//! - [`mode`] - Splitting segment text into units
//! - [`pacer`] - Pausing between units
//! - [`animator`] - The write-flush-pause loop

mod animator;
mod config;
mod mode;
mod pacer;

use std::io::{self, Write};

pub use animator::Animator;
pub use config::AnimatorConfig;
pub use mode::Mode;
pub use pacer::{NoPacer, Pacer, ThreadPacer};

use crate::error::Result;

/// Animate `text` onto `output` using speed and mode names.
///
/// Both names are validated before anything is written, so an invalid
/// speed or mode leaves `output` untouched.
///
/// ```no_run
/// let mut out = std::io::stdout();
/// typeanim::type_animation(r"Hello !/green\!world", "fast", "char", &mut out).unwrap();
/// ```
pub fn type_animation<W: Write + ?Sized>(
    text: &str,
    speed: &str,
    mode: &str,
    output: &mut W,
) -> Result<()> {
    let config = AnimatorConfig::from_names(speed, mode)?;
    Animator::new(config).animate(text, output)
}

/// Animate `text` onto standard output.
pub fn print_animation(text: &str, speed: &str, mode: &str) -> Result<()> {
    type_animation(text, speed, mode, &mut io::stdout())
}
