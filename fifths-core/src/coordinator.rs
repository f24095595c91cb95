//! StateCoordinator: owns the musical state and broadcasts recomputed scales.

use serde::{Deserialize, Serialize};

use fifths_types::{Action, DispatchResult, Dispatcher, Mode, Pitch, Scale, Triad};

use crate::dispatch::dispatch_action;
use crate::state::{AppState, MusicalSettings};

/// Handle returned by [`StateCoordinator::subscribe`]. Only the coordinator
/// mints these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a view needs to redraw after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub tonic: Pitch,
    pub mode: Mode,
    pub selected_triad: Option<Triad>,
    /// Scale of `tonic`/`mode`, annotated with `selected_triad`
    pub scale: Scale,
}

type Handler = Box<dyn FnMut(&StateChange)>;

/// Single-threaded observer over [`AppState`].
///
/// Every dispatch applies the action, recomputes the scale from scratch and
/// calls each handler synchronously, in registration order.
pub struct StateCoordinator {
    state: AppState,
    scale: Scale,
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u32,
}

impl StateCoordinator {
    pub fn new(settings: MusicalSettings) -> Self {
        let state = AppState::new_with_defaults(settings);
        Self {
            scale: state.scale(),
            state,
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Scale computed by the last dispatch (or at construction).
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn snapshot(&self) -> StateChange {
        StateChange {
            tonic: self.state.tonic,
            mode: self.state.mode,
            selected_triad: self.state.selected_triad,
            scale: self.scale,
        }
    }

    /// Register a handler. It is not called until the next dispatch.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.handlers.push((id, Box::new(handler)));
        log::debug!(target: "coordinator", "subscribed handler {}", id);
        id
    }

    /// Remove a handler. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    fn broadcast(&mut self) {
        let change = self.snapshot();
        for (_, handler) in self.handlers.iter_mut() {
            handler(&change);
        }
    }
}

impl Default for StateCoordinator {
    fn default() -> Self {
        Self::new(MusicalSettings::default())
    }
}

impl Dispatcher for StateCoordinator {
    fn dispatch(&mut self, action: &Action) -> DispatchResult {
        let result = dispatch_action(action, &mut self.state);
        self.scale = self.state.scale();
        log::debug!(
            target: "coordinator",
            "{} -> {} {} (changed: {}, {} subscribers)",
            action.name(),
            self.state.tonic,
            self.state.mode,
            result.changed,
            self.handlers.len()
        );
        self.broadcast();
        result
    }
}
