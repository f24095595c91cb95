//! Circle of fifths ordering and its scale-aware view model.

use serde::Serialize;

use super::pitch::Pitch;
use super::scale::{Scale, ScaleDegree};

/// Semitones in a perfect fifth. Coprime with 12, so stepping by it visits every pitch.
pub const FIFTH: u8 = 7;

/// The 12 pitches by ascending fifths, starting at C.
pub fn circle_of_fifths() -> [Pitch; 12] {
    let mut out = [Pitch::C; 12];
    let mut current = Pitch::C;
    for slot in out.iter_mut() {
        *slot = current;
        current = current.transpose(FIFTH);
    }
    out
}

/// One position on the circle, with the scale degree it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CircleSlot {
    /// Clockwise position, 0 = C at the top
    pub position: u8,
    pub pitch: Pitch,
    pub degree: Option<ScaleDegree>,
}

/// Circle of fifths annotated against `scale`.
pub fn circle_slots(scale: &Scale) -> [CircleSlot; 12] {
    let circle = circle_of_fifths();
    std::array::from_fn(|i| CircleSlot {
        position: i as u8,
        pitch: circle[i],
        degree: scale.find(circle[i]).copied(),
    })
}
