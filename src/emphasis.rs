//! `**`-delimited emphasis inside step text.

pub const EMPHASIS_MARKER: &str = "**";

/// A run of step text, either plain or emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

/// Split `text` on `**`; odd-indexed pieces are emphasized.
///
/// Empty pieces are kept, so `"**a**"` yields three segments. An unpaired
/// trailing marker is not an error: the text after it is simply emphasized.
pub fn parse_emphasis(text: &str) -> Vec<Segment<'_>> {
    text.split(EMPHASIS_MARKER)
        .enumerate()
        .map(|(i, piece)| Segment {
            text: piece,
            emphasized: i % 2 == 1,
        })
        .collect()
}

/// The step text with the markers removed
pub fn plain_text(text: &str) -> String {
    text.split(EMPHASIS_MARKER).collect()
}
