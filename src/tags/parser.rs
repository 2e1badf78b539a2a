//! Color tag parser.
//!
//! A tag opener looks like `!/name\!`. Everything after an opener up to the
//! next opener (or the end of the text) is that tag's content. Tags never
//! nest: a second opener always ends the first span.

use std::sync::OnceLock;

use regex::Regex;

use super::segment::Segment;
use crate::palette::Color;

/// Tag opener: `!/` then one or more word characters then `\!`.
const TAG_PATTERN: &str = r"!/(\w+)\\!";

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(TAG_PATTERN).expect("tag pattern is valid"))
}

/// Split text into colored segments.
///
/// Untagged text gets the reset code, tagged content gets the code for its
/// tag name (reset when the name is unknown). Segment order follows the
/// input, and joining the segment texts gives back the input minus the tag
/// openers. Text without tags comes back as a single plain segment.
pub fn parse_colors(text: &str) -> Vec<Segment<'_>> {
    // Collect first so each tag can see where the next one starts
    let openers: Vec<_> = tag_regex().captures_iter(text).collect();
    let mut segments = Vec::with_capacity(openers.len() + 1);
    let mut last_end = 0;

    for (i, caps) in openers.iter().enumerate() {
        let (Some(opener), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if opener.start() > last_end {
            segments.push(Segment::plain(&text[last_end..opener.start()]));
        }

        let content_end = openers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());

        segments.push(Segment::new(
            &text[opener.end()..content_end],
            Color::code_for(name.as_str()),
        ));
        last_end = content_end;
    }

    if last_end < text.len() {
        segments.push(Segment::plain(&text[last_end..]));
    }

    segments
}

/// Remove tag openers, keeping all other text.
pub fn strip_tags(text: &str) -> String {
    parse_colors(text).iter().map(|s| s.text).collect()
}
