//! The write-flush-pause loop.

use std::io::{self, Write};

use tracing::{debug, trace};

use super::config::AnimatorConfig;
use super::pacer::{Pacer, ThreadPacer};
use crate::error::Result;
use crate::palette::RESET;
use crate::tags::parse_colors;

/// Writes tagged text to a stream one unit at a time.
///
/// Every unit is written as `color, unit, reset, separator`, flushed, and
/// followed by a pause of the configured speed. A single newline ends the
/// animation. Write errors abort immediately; whatever was flushed stays
/// on the stream and no newline is written.
#[derive(Debug)]
pub struct Animator<P = ThreadPacer> {
    config: AnimatorConfig,
    pacer: P,
}

impl Animator<ThreadPacer> {
    /// Create an animator that sleeps the current thread between units.
    pub fn new(config: AnimatorConfig) -> Self {
        Self::with_pacer(config, ThreadPacer)
    }
}

impl<P: Pacer> Animator<P> {
    /// Create with a specific pacer (tests, `--no-delay`).
    pub fn with_pacer(config: AnimatorConfig, pacer: P) -> Self {
        Self { config, pacer }
    }

    /// The speed and mode this animator uses.
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Animate `text` onto `output`, blocking until done.
    pub fn animate<W: Write + ?Sized>(&mut self, text: &str, output: &mut W) -> Result<()> {
        let AnimatorConfig { speed, mode } = self.config;
        let delay = speed.delay();
        let separator = mode.separator();
        let segments = parse_colors(text);

        debug!(
            %speed,
            %mode,
            segments = segments.len(),
            "starting animation"
        );

        let mut written = 0usize;
        for segment in &segments {
            for unit in mode.units(segment.text) {
                write_unit(output, segment.color, unit, separator)?;
                trace!(unit, "wrote unit");
                self.pacer.pause(delay);
                written += 1;
            }
        }

        output.write_all(b"\n")?;
        output.flush()?;

        debug!(units = written, "animation finished");
        Ok(())
    }

    /// Give back the pacer, e.g. to inspect recorded pauses.
    pub fn into_pacer(self) -> P {
        self.pacer
    }
}

fn write_unit<W: Write + ?Sized>(
    output: &mut W,
    color: &str,
    unit: &str,
    separator: &str,
) -> io::Result<()> {
    write!(output, "{}{}{}{}", color, unit, RESET, separator)?;
    output.flush()
}
