use super::chord::{ChordRole, Triad};
use super::scale::Scale;

/// Mark the degrees of `scale` that belong to `triad`.
///
/// Returns a fresh scale. Every role is cleared first, then each triad slot
/// (root, third, fifth in order) is matched against the degrees by display
/// name. A degree keeps the first slot it matched.
pub fn annotate_chord(scale: &Scale, triad: &Triad) -> Scale {
    let mut annotated = clear_chord(scale);
    for degree in annotated.degrees_mut().iter_mut() {
        let role = ChordRole::ALL
            .into_iter()
            .find(|&role| triad.get(role).name() == degree.name());
        degree.set_chord_role(role);
    }
    annotated
}

/// Copy of `scale` with no chord roles set.
pub fn clear_chord(scale: &Scale) -> Scale {
    let mut cleared = *scale;
    for degree in cleared.degrees_mut().iter_mut() {
        degree.set_chord_role(None);
    }
    cleared
}

/// Annotate when a chord is selected, otherwise leave every role unset.
pub fn annotate_selection(scale: &Scale, selected: Option<&Triad>) -> Scale {
    match selected {
        Some(triad) => annotate_chord(scale, triad),
        None => clear_chord(scale),
    }
}
