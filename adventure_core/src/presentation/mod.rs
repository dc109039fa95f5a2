//! The presentation adapter boundary.
//!
//! The engine never renders anything. It notifies an adapter through this
//! narrow interface, and the adapter decides how a node, a tooltip, or a
//! failure becomes visible. Escaping markup-unsafe characters in segment
//! content is the adapter's job; the engine hands content through raw.

use story_model::{Choice, Segment};

use crate::error::EngineError;

/// Callbacks the engine raises toward the UI layer.
pub trait Presenter {
    /// A node was entered: render its segments and choice list. While
    /// `locked`, the choices must not be treated as actionable.
    fn node_entered(&mut self, segments: &[Segment], choices: &[Choice], locked: bool);

    /// A term was newly discovered; show its definition at the given
    /// segment index.
    fn term_revealed(&mut self, index: usize, definition: &str);

    /// Every term in the current node is discovered; choices are usable now.
    fn unlocked(&mut self);

    /// A navigation attempt was refused; the player stays where they are.
    fn navigation_failed(&mut self, reason: &EngineError);

    /// Show the story library.
    fn library_view(&mut self);

    /// Show the reading view for the named story.
    fn story_view(&mut self, title: &str);
}

/// One recorded adapter callback.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    NodeEntered {
        segments: Vec<Segment>,
        choices: Vec<Choice>,
        locked: bool,
    },
    TermRevealed {
        index: usize,
        definition: String,
    },
    Unlocked,
    NavigationFailed(EngineError),
    LibraryView,
    StoryView {
        title: String,
    },
}

/// A presenter that buffers every callback as a [`PresenterEvent`].
///
/// Useful for hosts that batch UI updates, and for asserting on engine
/// behavior in tests.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Vec<PresenterEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in callback order.
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<PresenterEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Presenter for Recorder {
    fn node_entered(&mut self, segments: &[Segment], choices: &[Choice], locked: bool) {
        self.events.push(PresenterEvent::NodeEntered {
            segments: segments.to_vec(),
            choices: choices.to_vec(),
            locked,
        });
    }

    fn term_revealed(&mut self, index: usize, definition: &str) {
        self.events.push(PresenterEvent::TermRevealed {
            index,
            definition: definition.to_string(),
        });
    }

    fn unlocked(&mut self) {
        self.events.push(PresenterEvent::Unlocked);
    }

    fn navigation_failed(&mut self, reason: &EngineError) {
        self.events.push(PresenterEvent::NavigationFailed(reason.clone()));
    }

    fn library_view(&mut self) {
        self.events.push(PresenterEvent::LibraryView);
    }

    fn story_view(&mut self, title: &str) {
        self.events.push(PresenterEvent::StoryView {
            title: title.to_string(),
        });
    }
}
