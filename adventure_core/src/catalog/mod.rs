//! Story catalog - the merged pool of built-in and registered stories.
//!
//! The catalog is a read-merge-write layer over a single shared store slot
//! holding a JSON object of story id to story record. Built-ins are seeded
//! only when their id is absent, so an externally edited record is never
//! clobbered. A corrupt or unreadable slot degrades to an empty catalog;
//! individual malformed records are skipped without failing the rest.

mod store;

pub use store::*;

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use story_model::{built_in_stories, is_built_in, StoryRecord};
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Catalog over an injected store port.
pub struct Catalog<S: StoryStore> {
    store: S,
}

impl<S: StoryStore> Catalog<S> {
    /// Create a catalog backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Seed the built-in stories into the store. Idempotent: an id already
    /// present is left untouched, and the store is rewritten only when
    /// something was actually inserted.
    pub fn seed_defaults(&mut self) -> Result<(), CatalogError> {
        let mut entries = self.read_entries();
        let mut changed = false;

        for story in built_in_stories() {
            if !entries.contains_key(&story.id) {
                debug!(id = %story.id, "seeding built-in story");
                entries.insert(story.id.clone(), serde_json::to_value(&story)?);
                changed = true;
            }
        }

        if changed {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    /// The merged, validated view of every story in the store.
    ///
    /// Read or parse failures degrade to an empty map; records failing the
    /// shape check are skipped individually.
    pub fn list_all(&self) -> BTreeMap<String, StoryRecord> {
        let mut stories = BTreeMap::new();
        for (key, value) in self.read_entries() {
            match validate(value) {
                Some(record) => {
                    stories.insert(record.id.clone(), record);
                }
                None => warn!(key = %key, "skipping malformed story record"),
            }
        }
        stories
    }

    /// The registered stories that are not built-ins, for library views that
    /// render built-in cards from a static listing.
    pub fn list_custom(&self) -> BTreeMap<String, StoryRecord> {
        let mut stories = self.list_all();
        stories.retain(|id, _| !is_built_in(id));
        stories
    }

    /// Look up one story by id.
    pub fn resolve(&self, id: &str) -> Result<StoryRecord, CatalogError> {
        self.list_all()
            .remove(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Whether an id is reserved for a built-in story.
    pub fn is_builtin(&self, id: &str) -> bool {
        is_built_in(id)
    }

    /// Register (or update) a story under its own id.
    ///
    /// Dangling choice targets are accepted; they only surface when the
    /// player tries to follow them.
    pub fn register(&mut self, record: &StoryRecord) -> Result<(), CatalogError> {
        if record.id.is_empty() {
            return Err(CatalogError::MissingId);
        }

        let mut entries = self.read_entries();
        entries.insert(record.id.clone(), serde_json::to_value(record)?);
        self.write_entries(&entries)
    }

    fn read_entries(&self) -> Map<String, Value> {
        let bytes = match self.store.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Map::new(),
            Err(err) => {
                warn!(%err, "story store unreadable; treating catalog as empty");
                return Map::new();
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(entries)) => entries,
            Ok(_) | Err(_) => {
                warn!("story store is corrupt; treating catalog as empty");
                Map::new()
            }
        }
    }

    fn write_entries(&mut self, entries: &Map<String, Value>) -> Result<(), CatalogError> {
        let bytes = serde_json::to_vec(entries)?;
        self.store.write(&bytes)?;
        Ok(())
    }
}

/// Shape-check one stored entry. A record must carry a non-empty `id` and a
/// `data` object; everything else is defaulted.
fn validate(value: Value) -> Option<StoryRecord> {
    let record: StoryRecord = serde_json::from_value(value).ok()?;
    if record.id.is_empty() {
        return None;
    }
    Some(record)
}
