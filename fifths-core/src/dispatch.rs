//! Reducer from [`Action`] to a new [`AppState`].

use fifths_types::{build_scale, Action, DispatchResult};

use crate::state::AppState;

/// Apply `action` to `state`. Pure apart from the mutation of `state`.
///
/// Changing tonic or mode keeps the selected triad; it is re-matched against
/// the new scale by name.
pub fn dispatch_action(action: &Action, state: &mut AppState) -> DispatchResult {
    let before = *state;

    match *action {
        Action::SetTonic(tonic) => state.tonic = tonic,
        Action::SetMode(mode) => state.mode = mode,
        Action::SelectChord(triad) => state.selected_triad = Some(triad),
        Action::SelectDegree(degree) => {
            let scale = build_scale(state.tonic, state.mode);
            state.selected_triad = Some(scale.degree(degree).triad());
        }
        Action::ClearChord => state.selected_triad = None,
    }

    if *state == before {
        DispatchResult::none()
    } else {
        DispatchResult::changed()
    }
}
