//! Inline color tags.
//!
//! Turns `plain !/red\!colored` into ordered segments the animator can
//! write out one unit at a time.

mod parser;
mod segment;

pub use parser::{parse_colors, strip_tags};
pub use segment::Segment;
