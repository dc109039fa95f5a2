//! Navigation state machine - walks the player through a story graph.
//!
//! The engine is either `Idle` (no active story) or holds one session over
//! the active graph. Entering a node parses its text fresh, resets discovery,
//! and locks the choices until every vocabulary term has been revealed.
//! Dangling edges refuse navigation and leave the prior node untouched; no
//! operation ever moves the player into an undefined state.
//!
//! All operations run to completion on the calling thread. One transition
//! finishes before the next begins, so the session needs no internal locking.

mod discovery;

pub use discovery::*;

use story_model::{entry_node, parse, NodeGraph, Segment, StoryRecord, START_NODE};
use tracing::warn;

use crate::error::EngineError;
use crate::presentation::Presenter;

/// State for one active story. Created by `enter_story`, fully replaced on
/// every node transition, dropped by `exit_to_library`.
#[derive(Debug)]
struct Session {
    graph: NodeGraph,
    /// `None` until the first successful navigation (e.g. an empty graph).
    current: Option<String>,
    segments: Vec<Segment>,
    discovery: DiscoveryTracker,
    locked: bool,
}

/// The playback engine, notifying a presentation adapter as state changes.
pub struct Engine<P: Presenter> {
    presenter: P,
    session: Option<Session>,
}

impl<P: Presenter> Engine<P> {
    /// Create an idle engine.
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            session: None,
        }
    }

    /// Start a play session for the given story and enter its entry node:
    /// `start` if present, otherwise the smallest node id.
    pub fn enter_story(&mut self, record: &StoryRecord) -> Result<(), EngineError> {
        self.session = Some(Session {
            graph: record.nodes.clone(),
            current: None,
            segments: Vec::new(),
            discovery: DiscoveryTracker::default(),
            locked: false,
        });
        self.presenter.story_view(&record.title);

        let entry = entry_node(&record.nodes).unwrap_or(START_NODE).to_string();
        self.navigate(&entry)
    }

    /// Move to a node of the active graph.
    ///
    /// An unknown id fails with `DanglingReference`: the adapter is notified,
    /// and the player stays on the prior node with its discovery progress
    /// intact. A known id replaces the whole visit state and notifies the
    /// adapter with the fresh segments and choices.
    pub fn navigate(&mut self, node_id: &str) -> Result<(), EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NoSession)?;

        let Some(node) = session.graph.get(node_id) else {
            warn!(node = node_id, "refusing navigation to unknown node");
            let reason = EngineError::DanglingReference(node_id.to_string());
            self.presenter.navigation_failed(&reason);
            return Err(reason);
        };

        let segments = parse(&node.text);
        let choices = node.choices.clone();
        let discovery = DiscoveryTracker::for_segments(&segments);
        let locked = discovery.total() > 0;

        session.current = Some(node_id.to_string());
        session.segments = segments;
        session.discovery = discovery;
        session.locked = locked;

        self.presenter.node_entered(&session.segments, &choices, locked);
        if !locked {
            self.presenter.unlocked();
        }
        Ok(())
    }

    /// Reveal the vocabulary term at a segment index.
    ///
    /// Idempotent: plain-text indices, out-of-range indices, and repeat
    /// reveals are no-ops. When the last undiscovered term is revealed the
    /// choices unlock, and the unlock notification fires exactly once per
    /// node visit.
    pub fn reveal_term(&mut self, index: usize) -> Result<(), EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NoSession)?;

        match session.discovery.reveal(&mut session.segments, index) {
            RevealOutcome::Revealed(definition) => {
                self.presenter.term_revealed(index, &definition);
                if session.locked && session.discovery.is_complete() {
                    session.locked = false;
                    self.presenter.unlocked();
                }
            }
            RevealOutcome::AlreadyDiscovered | RevealOutcome::NotVocabulary => {}
        }
        Ok(())
    }

    /// Follow the choice at `index` on the current node.
    ///
    /// Fails with `Locked` while terms remain undiscovered; the choice target
    /// is then resolved through `navigate`, which handles dangling edges.
    pub fn select_choice(&mut self, index: usize) -> Result<(), EngineError> {
        let session = self.session.as_ref().ok_or(EngineError::NoSession)?;

        if session.locked {
            self.presenter.navigation_failed(&EngineError::Locked);
            return Err(EngineError::Locked);
        }

        let current = session.current.as_deref().ok_or(EngineError::NoSession)?;
        let node = session
            .graph
            .get(current)
            .ok_or_else(|| EngineError::DanglingReference(current.to_string()))?;
        let next = match node.choices.get(index) {
            Some(choice) => choice.next.clone(),
            None => return Err(EngineError::UnknownChoice(index)),
        };

        self.navigate(&next)
    }

    /// Drop the session and return to the library.
    pub fn exit_to_library(&mut self) {
        self.session = None;
        self.presenter.library_view();
    }

    /// Whether no story is active.
    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// The id of the node the player is on, if any.
    pub fn current_node(&self) -> Option<&str> {
        self.session.as_ref()?.current.as_deref()
    }

    /// Whether choices are currently gated.
    pub fn is_locked(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.locked)
    }

    /// Found and total term counts for the current visit.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.session.as_ref().map(|s| s.discovery.progress())
    }

    /// The adapter this engine notifies.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
