//! Command handlers for the typeanim binary.

pub mod completions;
pub mod list;
pub mod play;
