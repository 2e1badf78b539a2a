//! Pause strategies between animation units.

use std::thread;
use std::time::Duration;

/// Something that waits between written units.
///
/// The animator calls `pause` once per unit, after the unit has been
/// flushed. Implementations must block until the pause is over.
pub trait Pacer {
    /// Wait for `delay`.
    fn pause(&mut self, delay: Duration);
}

/// Blocks the calling thread with `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        thread::sleep(delay);
    }
}

/// Never waits. Output is still written and flushed unit by unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _delay: Duration) {}
}
