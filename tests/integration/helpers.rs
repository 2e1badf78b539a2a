//! Shared helpers for integration tests

use std::time::Duration;

use typeanim::{Animator, AnimatorConfig, Color, Mode, Pacer, Speed};

/// Pacer that records requested pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}

/// Animate without sleeping; returns the written text and recorded pauses.
pub fn animate(text: &str, speed: Speed, mode: Mode) -> (String, Vec<Duration>) {
    let mut out = Vec::new();
    let mut animator =
        Animator::with_pacer(AnimatorConfig::new(speed, mode), RecordingPacer::default());
    animator
        .animate(text, &mut out)
        .expect("animation into a Vec should not fail");

    let pauses = animator.into_pacer().pauses;
    (String::from_utf8(out).expect("output is UTF-8"), pauses)
}

/// Replace escape codes with `<name>` markers and newlines with `⏎`.
pub fn describe(output: &str) -> String {
    let mut described = output.replace('\n', "⏎");
    for color in Color::ALL {
        described = described.replace(color.code(), &format!("<{}>", color.name()));
    }
    described
}

/// The typeanim binary under test.
pub fn typeanim() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("typeanim").expect("typeanim binary is built")
}
