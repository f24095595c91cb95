//! Music theory: pitches, modes, scales, triads and their view models.
//!
//! Everything here is a pure function over fixed catalogs. No allocation
//! beyond the fretboard rows, no shared state, safe to call from any thread.

pub mod annotate;
pub mod chord;
pub mod circle;
pub mod fretboard;
pub mod mode;
pub mod pitch;
pub mod scale;

pub use annotate::{annotate_chord, annotate_selection, clear_chord};
pub use chord::{classify, ChordRole, ChordType, Triad};
pub use circle::{circle_of_fifths, circle_slots, CircleSlot, FIFTH};
pub use fretboard::{fretboard, FretPosition, Fretboard, FRET_COUNT, STANDARD_TUNING};
pub use mode::{list_modes, Mode, MAJOR_STEPS};
pub use pitch::{list_pitches, Pitch, PITCH_COUNT};
pub use scale::{build_scale, Scale, ScaleDegree, ScaleError, DEGREE_COUNT, DEGREE_NAMES};
