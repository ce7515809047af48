//! Splits free text into plain and `<code>` segments for previews.

pub const OPEN: &str = "<code>";
pub const CLOSE: &str = "</code>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Code(String),
}

impl Segment {
    pub fn content(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Code(s) => s,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code(_))
    }
}

enum State {
    Plain,
    Code { open_at: usize },
}

/// Parse `text` into an ordered list of segments.
///
/// Markers are stripped from code segments and empty plain runs are not
/// emitted, so empty input gives an empty list. An opening marker with no
/// closing marker after it is kept as plain text together with the rest of
/// the input. A closing marker outside a span is plain text.
///
/// Spans do not nest: inside a span a second `<code>` is ordinary content and
/// the first `</code>` ends the span.
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut state = State::Plain;
    let mut plain_start = 0;
    let mut cursor = 0;

    loop {
        match state {
            State::Plain => match text[cursor..].find(OPEN) {
                Some(offset) => {
                    let open_at = cursor + offset;
                    cursor = open_at + OPEN.len();
                    state = State::Code { open_at };
                }
                None => break,
            },
            State::Code { open_at } => match text[cursor..].find(CLOSE) {
                Some(offset) => {
                    let close_at = cursor + offset;
                    push_plain(&mut segments, &text[plain_start..open_at]);
                    segments.push(Segment::Code(text[cursor..close_at].to_string()));
                    cursor = close_at + CLOSE.len();
                    plain_start = cursor;
                    state = State::Plain;
                }
                // unmatched opener, the pending plain run absorbs the rest
                None => break,
            },
        }
    }

    push_plain(&mut segments, &text[plain_start..]);
    segments
}

fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Plain(text.to_string()));
    }
}

/// Inverse of [`parse`] for well-formed input: re-inserts the markers.
pub fn join(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s {
            Segment::Plain(text) => text.clone(),
            Segment::Code(code) => format!("{OPEN}{code}{CLOSE}"),
        })
        .collect()
}
