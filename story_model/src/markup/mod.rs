//! Vocabulary markup parsing.
//!
//! Story text embeds discoverable words with `[surface|definition]` spans.
//! `parse` splits raw text into typed segments:
//! - **Text**: everything outside a well-formed span
//! - **Vocab**: one span, carrying its surface word and definition
//!
//! Matching is non-greedy, non-nested, and non-overlapping: a span runs from
//! an opening bracket to the first closing bracket after the first pipe, and
//! never crosses a line break. Anything that does not complete a span
//! (missing pipe, unbalanced brackets) stays plain text; malformed markup is
//! never an error.
//!
//! Content passes through unmodified. Escaping HTML-unsafe characters is the
//! presentation layer's responsibility, so both surface and definition may
//! contain characters that would be unsafe to interpolate raw.

use serde::{Deserialize, Serialize};

/// One piece of a parsed paragraph.
///
/// Segments are recomputed from the node text on every node entry and
/// discarded on navigation; only the `discovered` flag ever mutates, and only
/// while its node is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Plain narrative text.
    Text { content: String },
    /// A discoverable vocabulary term.
    Vocab {
        surface: String,
        definition: String,
        discovered: bool,
    },
}

impl Segment {
    /// Whether this segment is a vocabulary term.
    pub fn is_vocab(&self) -> bool {
        matches!(self, Segment::Vocab { .. })
    }
}

/// Parse raw node text into an ordered segment sequence.
pub fn parse(raw: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let bytes = raw.as_bytes();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some((pipe, close)) = match_span(raw, i) {
                if plain_start < i {
                    segments.push(Segment::Text {
                        content: raw[plain_start..i].to_string(),
                    });
                }
                segments.push(Segment::Vocab {
                    surface: raw[i + 1..pipe].to_string(),
                    definition: raw[pipe + 1..close].to_string(),
                    discovered: false,
                });
                i = close + 1;
                plain_start = i;
                continue;
            }
        }
        i += 1;
    }

    if plain_start < raw.len() {
        segments.push(Segment::Text {
            content: raw[plain_start..].to_string(),
        });
    }

    segments
}

/// Try to complete a span starting at the `[` at byte offset `open`.
///
/// Returns the byte offsets of the pipe and the closing bracket. The span is
/// the first pipe after the bracket followed by the first closing bracket
/// after that pipe, bounded by the end of the line.
fn match_span(raw: &str, open: usize) -> Option<(usize, usize)> {
    let line_end = raw[open..]
        .find('\n')
        .map(|offset| open + offset)
        .unwrap_or(raw.len());

    let pipe = raw[open + 1..line_end].find('|')? + open + 1;
    let close = raw[pipe + 1..line_end].find(']')? + pipe + 1;
    Some((pipe, close))
}

/// Count the vocabulary terms in a segment sequence.
pub fn vocab_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.is_vocab()).count()
}

/// The text a reader sees: plain content with markup collapsed to bare
/// surface words.
pub fn visible_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text { content } => out.push_str(content),
            Segment::Vocab { surface, .. } => out.push_str(surface),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(content: &str) -> Segment {
        Segment::Text {
            content: content.to_string(),
        }
    }

    fn vocab(surface: &str, definition: &str) -> Segment {
        Segment::Vocab {
            surface: surface.to_string(),
            definition: definition.to_string(),
            discovered: false,
        }
    }

    #[test]
    fn test_parse_plain_only() {
        assert_eq!(parse("Just a sentence."), vec![text("Just a sentence.")]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_single_term() {
        let segments = parse("A [cat|small feline] sat.");
        assert_eq!(
            segments,
            vec![text("A "), vocab("cat", "small feline"), text(" sat.")]
        );
    }

    #[test]
    fn test_parse_multiple_terms() {
        let segments = parse("[mist|thin fog] and [peal|loud ringing]");
        assert_eq!(
            segments,
            vec![
                vocab("mist", "thin fog"),
                text(" and "),
                vocab("peal", "loud ringing"),
            ]
        );
        assert_eq!(vocab_count(&segments), 2);
    }

    #[test]
    fn test_adjacent_terms() {
        let segments = parse("[a|1][b|2]");
        assert_eq!(segments, vec![vocab("a", "1"), vocab("b", "2")]);
    }

    #[test]
    fn test_missing_pipe_is_plain_text() {
        assert_eq!(parse("no [term here"), vec![text("no [term here")]);
        assert_eq!(parse("lone ] bracket"), vec![text("lone ] bracket")]);
    }

    #[test]
    fn test_unclosed_span_is_plain_text() {
        assert_eq!(parse("a [b|c without end"), vec![text("a [b|c without end")]);
    }

    #[test]
    fn test_extra_pipe_goes_to_definition() {
        // Lazy surface, lazy definition: the first pipe splits, the first
        // closing bracket ends the span.
        assert_eq!(parse("[a|b|c]"), vec![vocab("a", "b|c")]);
    }

    #[test]
    fn test_pipeless_bracket_absorbed_by_later_span() {
        // A bracket with no pipe of its own extends the surface of the next
        // complete span; lazy matching starts at the earliest open bracket.
        let segments = parse("[x] and [a|b]");
        assert_eq!(segments, vec![vocab("x] and [a", "b")]);
    }

    #[test]
    fn test_span_never_crosses_a_line_break() {
        let segments = parse("[a\n|b] plain");
        assert_eq!(segments, vec![text("[a\n|b] plain")]);
    }

    #[test]
    fn test_content_passes_through_raw() {
        let segments = parse("<b> [x<i>|y & \"z\"] </b>");
        assert_eq!(
            segments,
            vec![text("<b> "), vocab("x<i>", "y & \"z\""), text(" </b>")]
        );
    }

    #[test]
    fn test_unicode_text_around_terms() {
        let segments = parse("Un \u{e9}l\u{e8}ve lit [mot|word] \u{2014} fin");
        assert_eq!(
            segments,
            vec![
                text("Un \u{e9}l\u{e8}ve lit "),
                vocab("mot", "word"),
                text(" \u{2014} fin"),
            ]
        );
    }

    #[test]
    fn test_visible_text_round_trip() {
        let raw = "The [ominous|threatening] silence is broken by a [peal|loud ringing].";
        assert_eq!(
            visible_text(&parse(raw)),
            "The ominous silence is broken by a peal."
        );
    }

    #[test]
    fn test_visible_text_of_plain_input_is_identity() {
        let raw = "Nothing hidden here.";
        assert_eq!(visible_text(&parse(raw)), raw);
    }
}
