use serde::{Deserialize, Serialize};

use fifths_types::{annotate_selection, build_scale, Mode, Pitch, Scale, Triad};

/// Musical defaults applied to a fresh state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicalSettings {
    pub tonic: Pitch,
    pub mode: Mode,
}

impl Default for MusicalSettings {
    fn default() -> Self {
        Self {
            tonic: Pitch::C,
            mode: Mode::Major,
        }
    }
}

/// The only mutable state in the system: what the user has picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub tonic: Pitch,
    pub mode: Mode,
    pub selected_triad: Option<Triad>,
}

impl AppState {
    pub fn new() -> Self {
        Self::new_with_defaults(MusicalSettings::default())
    }

    pub fn new_with_defaults(settings: MusicalSettings) -> Self {
        Self {
            tonic: settings.tonic,
            mode: settings.mode,
            selected_triad: None,
        }
    }

    /// Scale for the current tonic and mode, annotated with the selected chord.
    ///
    /// Recomputed from scratch on every call.
    pub fn scale(&self) -> Scale {
        let scale = build_scale(self.tonic, self.mode);
        annotate_selection(&scale, self.selected_triad.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fifths_types::ChordRole;

    #[test]
    fn default_state_is_c_major_without_chord() {
        let state = AppState::default();
        assert_eq!(state.tonic, Pitch::C);
        assert_eq!(state.mode, Mode::Major);
        assert!(state.selected_triad.is_none());
    }

    #[test]
    fn new_with_defaults_applies_settings() {
        let state = AppState::new_with_defaults(MusicalSettings {
            tonic: Pitch::Fs,
            mode: Mode::Phrygian,
        });
        assert_eq!(state.scale().tonic(), Pitch::Fs);
        assert_eq!(state.mode, Mode::Phrygian);
    }

    #[test]
    fn scale_reflects_selection() {
        let mut state = AppState::new();
        assert_eq!(state.scale().chord_tones().count(), 0);

        state.selected_triad = Some(Triad::new(Pitch::F, Pitch::A, Pitch::C));
        let scale = state.scale();
        assert_eq!(scale.degree(3).chord_role(), Some(ChordRole::Root));
        assert_eq!(scale.degree(5).chord_role(), Some(ChordRole::Third));
        assert_eq!(scale.degree(0).chord_role(), Some(ChordRole::Fifth));
    }
}
