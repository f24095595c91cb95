//! Action types for the dispatch system.
//!
//! Actions represent user intents coming from the views: picking a tonic on
//! the circle, pressing a mode button, clicking a chord.

use serde::{Deserialize, Serialize};

use crate::music::{Mode, Pitch, Triad};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Rebuild the scale on a new tonic
    SetTonic(Pitch),
    /// Rebuild the scale in a new mode
    SetMode(Mode),
    /// Select an arbitrary triad
    SelectChord(Triad),
    /// Select the diatonic triad of a degree (0..7) of the current scale
    SelectDegree(u8),
    ClearChord,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetTonic(_) => "set_tonic",
            Action::SetMode(_) => "set_mode",
            Action::SelectChord(_) => "select_chord",
            Action::SelectDegree(_) => "select_degree",
            Action::ClearChord => "clear_chord",
        }
    }
}

/// Outcome of a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// True if the state differs from before the action
    pub changed: bool,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self { changed: true }
    }
}
