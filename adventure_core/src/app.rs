//! Application facade - wires the catalog and the playback engine together.
//!
//! A host owns one `Adventure`, forwards player input to it, and implements
//! the [`Presenter`] side. When the host's store reports an out-of-band
//! mutation (another window or process wrote a story), it calls
//! [`Adventure::handle_external_change`]: the library listing reconciles, but
//! an active session is never swapped out from under the player.

use std::collections::BTreeMap;

use story_model::StoryRecord;

use crate::catalog::{Catalog, StoryStore};
use crate::error::{CatalogError, EngineError};
use crate::presentation::Presenter;
use crate::session::Engine;

/// One running application: a catalog over a shared store plus at most one
/// active play session.
pub struct Adventure<S: StoryStore, P: Presenter> {
    catalog: Catalog<S>,
    engine: Engine<P>,
}

impl<S: StoryStore, P: Presenter> Adventure<S, P> {
    pub fn new(store: S, presenter: P) -> Self {
        Self {
            catalog: Catalog::new(store),
            engine: Engine::new(presenter),
        }
    }

    /// Seed the built-in stories and show the library.
    pub fn start(&mut self) -> Result<(), CatalogError> {
        self.catalog.seed_defaults()?;
        self.engine.exit_to_library();
        Ok(())
    }

    /// The current library listing.
    pub fn library(&self) -> BTreeMap<String, StoryRecord> {
        self.catalog.list_all()
    }

    /// Resolve a story id and enter it.
    pub fn enter_story(&mut self, id: &str) -> Result<(), CatalogError> {
        let record = self.catalog.resolve(id)?;
        // Entry navigation may fail on a degenerate graph; the engine has
        // already reported it to the presenter and stayed consistent.
        let _ = self.engine.enter_story(&record);
        Ok(())
    }

    pub fn reveal_term(&mut self, index: usize) -> Result<(), EngineError> {
        self.engine.reveal_term(index)
    }

    pub fn select_choice(&mut self, index: usize) -> Result<(), EngineError> {
        self.engine.select_choice(index)
    }

    pub fn exit_to_library(&mut self) {
        self.engine.exit_to_library();
    }

    /// Reconcile after another actor mutated the shared store.
    ///
    /// Re-seeds missing built-ins and returns the fresh listing. The active
    /// session, if any, keeps playing against the graph it entered with; the
    /// new catalog contents only apply when the player re-enters a story.
    pub fn handle_external_change(&mut self) -> Result<BTreeMap<String, StoryRecord>, CatalogError> {
        self.catalog.seed_defaults()?;
        Ok(self.catalog.list_all())
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog<S> {
        &mut self.catalog
    }

    pub fn engine(&self) -> &Engine<P> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<P> {
        &mut self.engine
    }
}
