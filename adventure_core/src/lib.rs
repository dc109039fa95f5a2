//! # Adventure Core (Wordpath)
//!
//! The playback engine for vocabulary adventures. This crate resolves story
//! graphs from a shared catalog, walks the player through them, and gates
//! navigation until every vocabulary term in the current node has been
//! discovered.
//!
//! ## Core Components
//!
//! - **catalog**: Merged pool of built-in and user-registered stories over an
//!   injected store port
//! - **session**: Navigation state machine and per-visit discovery tracking
//! - **presentation**: The narrow adapter interface the engine notifies;
//!   rendering itself lives outside this crate
//! - **app**: Facade wiring catalog and session together for a host
//!
//! ## Design Philosophy
//!
//! - **Synchronous**: Every operation runs to completion on the calling
//!   thread; one transition finishes before the next begins
//! - **Recoverable**: Corrupt stores, malformed records, and dangling edges
//!   degrade locally and never take down a session
//! - **Injected boundaries**: Storage and rendering are ports, so the engine
//!   is testable with fakes

pub mod app;
pub mod catalog;
pub mod error;
pub mod presentation;
pub mod session;

pub use app::*;
pub use catalog::*;
pub use error::*;
pub use presentation::*;
pub use session::*;
