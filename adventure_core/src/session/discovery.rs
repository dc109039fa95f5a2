//! Per-visit discovery tracking.
//!
//! Tracks how many of the current node's vocabulary terms have been revealed.
//! Repeat reveals of the same term never count twice, and completion is pure
//! count equality; the order of reveals does not matter.

use story_model::{vocab_count, Segment};

/// The result of a reveal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// A term was newly discovered; carries its definition.
    Revealed(String),
    /// The term was already discovered this visit.
    AlreadyDiscovered,
    /// The index points at plain text, or past the end of the segments.
    NotVocabulary,
}

/// Counters for one node visit. Reset on every navigation.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryTracker {
    discovered: usize,
    total: usize,
}

impl DiscoveryTracker {
    /// Start tracking a freshly parsed segment sequence.
    pub fn for_segments(segments: &[Segment]) -> Self {
        Self {
            discovered: 0,
            total: vocab_count(segments),
        }
    }

    /// Attempt to reveal the term at `index`, flipping its `discovered` flag.
    pub fn reveal(&mut self, segments: &mut [Segment], index: usize) -> RevealOutcome {
        match segments.get_mut(index) {
            Some(Segment::Vocab {
                discovered,
                definition,
                ..
            }) => {
                if *discovered {
                    RevealOutcome::AlreadyDiscovered
                } else {
                    *discovered = true;
                    self.discovered += 1;
                    RevealOutcome::Revealed(definition.clone())
                }
            }
            _ => RevealOutcome::NotVocabulary,
        }
    }

    /// Whether every term in the visit has been discovered.
    pub fn is_complete(&self) -> bool {
        self.discovered == self.total
    }

    /// Found and total counts, for progress displays.
    pub fn progress(&self) -> (usize, usize) {
        (self.discovered, self.total)
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_model::parse;

    #[test]
    fn test_reveal_counts_once_per_term() {
        let mut segments = parse("A [cat|small feline] sat by a [dog|loyal hound].");
        let mut tracker = DiscoveryTracker::for_segments(&segments);
        assert_eq!(tracker.progress(), (0, 2));

        assert_eq!(
            tracker.reveal(&mut segments, 1),
            RevealOutcome::Revealed("small feline".to_string())
        );
        assert_eq!(
            tracker.reveal(&mut segments, 1),
            RevealOutcome::AlreadyDiscovered
        );
        assert_eq!(tracker.progress(), (1, 2));
        assert!(!tracker.is_complete());
    }

    #[test]
    fn test_reveal_on_plain_text_or_out_of_range() {
        let mut segments = parse("A [cat|small feline] sat.");
        let mut tracker = DiscoveryTracker::for_segments(&segments);

        assert_eq!(tracker.reveal(&mut segments, 0), RevealOutcome::NotVocabulary);
        assert_eq!(tracker.reveal(&mut segments, 99), RevealOutcome::NotVocabulary);
        assert_eq!(tracker.progress(), (0, 1));
    }

    #[test]
    fn test_completion_is_order_free() {
        let mut segments = parse("[a|1] then [b|2] then [c|3]");
        let mut tracker = DiscoveryTracker::for_segments(&segments);

        tracker.reveal(&mut segments, 4);
        tracker.reveal(&mut segments, 0);
        assert!(!tracker.is_complete());
        tracker.reveal(&mut segments, 2);
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_zero_terms_is_complete_immediately() {
        let segments = parse("nothing hidden");
        let tracker = DiscoveryTracker::for_segments(&segments);
        assert!(tracker.is_complete());
        assert_eq!(tracker.total(), 0);
    }
}
