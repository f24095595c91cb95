//! Dispatch abstraction over whoever owns the musical state.

use crate::{Action, DispatchResult};

/// Trait for dispatching actions to the state owner.
///
/// Views translate gestures (clicking a note, a chord, a mode button) into
/// [`Action`]s and hand them to a dispatcher without knowing how state is held.
pub trait Dispatcher {
    /// Dispatch an action and return the result.
    fn dispatch(&mut self, action: &Action) -> DispatchResult;
}
