//! # Story Model
//!
//! The "Storybook" crate - contains the story graph data model, the
//! vocabulary markup parser, and the built-in adventures. This crate is the
//! single source of truth for story content and does not contain any
//! playback logic.

pub mod builtin;
pub mod markup;
pub mod story;

pub use builtin::*;
pub use markup::*;
pub use story::*;
