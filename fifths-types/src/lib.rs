//! # fifths-types
//!
//! Music-theory core and shared type definitions for the fifths visualizer.
//! The circle-of-fifths, mode picker and fretboard views all render from the
//! values computed here; `fifths-core` owns the mutable state that drives them.

pub mod action;
pub mod dispatch;
pub mod music;

pub use action::{Action, DispatchResult};
pub use dispatch::Dispatcher;

// Re-export the theory layer at crate root for convenience
pub use music::*;
