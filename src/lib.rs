//! typeanim - typewriter-style terminal text animation
//!
//! Prints text character by character, word by word or sentence by
//! sentence, with inline color tags of the form `!/red\!text`.
//!
//! # Usage
//!
//! ```no_run
//! use typeanim::{parse_colors, print_animation};
//!
//! let segments = parse_colors(r"plain !/cyan\!colored");
//! assert_eq!(segments.len(), 2);
//!
//! print_animation(r"Loading !/bright_green\!done!", "fast", "word").unwrap();
//! ```

pub mod animate;
pub mod error;
pub mod palette;
pub mod speed;
pub mod tags;

pub use animate::{
    print_animation, type_animation, Animator, AnimatorConfig, Mode, NoPacer, Pacer, ThreadPacer,
};
pub use error::{decode_text, Error, Result};
pub use palette::{Color, RESET};
pub use speed::Speed;
pub use tags::{parse_colors, strip_tags, Segment};
