//! Listing handlers for colors and speeds.

use anyhow::Result;
use std::io::{self, Write};

use typeanim::{Color, Speed};

/// Print every color tag name, painted in its own color.
pub fn handle_colors() -> Result<()> {
    let mut out = io::stdout().lock();
    write_colors(&mut out)?;
    Ok(())
}

/// Print each speed name with its per-unit delay.
pub fn handle_speeds() -> Result<()> {
    let mut out = io::stdout().lock();
    write_speeds(&mut out)?;
    Ok(())
}

fn write_colors<W: Write>(out: &mut W) -> io::Result<()> {
    for color in Color::ALL {
        writeln!(out, "{}", color.paint(color.name()))?;
    }
    Ok(())
}

fn write_speeds<W: Write>(out: &mut W) -> io::Result<()> {
    for speed in Speed::ALL {
        writeln!(
            out,
            "{:<8}{:.2}s",
            speed.name(),
            speed.delay().as_secs_f64()
        )?;
    }
    Ok(())
}
