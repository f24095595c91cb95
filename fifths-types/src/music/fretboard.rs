//! Guitar fretboard view model in fixed standard tuning.

use serde::Serialize;

use super::pitch::Pitch;
use super::scale::{Scale, ScaleDegree};

/// Highest fret modelled. Fret 0 is the open string.
pub const FRET_COUNT: u8 = 12;

/// Open-string pitches from the lowest string up (E A D G B E).
pub const STANDARD_TUNING: [Pitch; 6] = [Pitch::E, Pitch::A, Pitch::D, Pitch::G, Pitch::B, Pitch::E];

const FRETS_PER_STRING: usize = FRET_COUNT as usize + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretPosition {
    /// 0 = low E
    pub string: u8,
    pub fret: u8,
    pub pitch: Pitch,
    pub degree: Option<ScaleDegree>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fretboard {
    strings: Vec<[FretPosition; FRETS_PER_STRING]>,
}

impl Fretboard {
    pub fn string(&self, string: u8) -> Option<&[FretPosition; FRETS_PER_STRING]> {
        self.strings.get(string as usize)
    }

    pub fn position(&self, string: u8, fret: u8) -> Option<&FretPosition> {
        self.string(string)?.get(fret as usize)
    }

    pub fn positions(&self) -> impl Iterator<Item = &FretPosition> {
        self.strings.iter().flatten()
    }

    /// Positions whose pitch belongs to the scale.
    pub fn in_scale(&self) -> impl Iterator<Item = &FretPosition> {
        self.positions().filter(|p| p.degree.is_some())
    }
}

/// Lay `scale` out over every string and fret.
pub fn fretboard(scale: &Scale) -> Fretboard {
    let strings = STANDARD_TUNING
        .iter()
        .enumerate()
        .map(|(string, &open)| {
            std::array::from_fn::<_, FRETS_PER_STRING, _>(|fret| {
                let pitch = open.transpose(fret as u8);
                FretPosition {
                    string: string as u8,
                    fret: fret as u8,
                    pitch,
                    degree: scale.find(pitch).copied(),
                }
            })
        })
        .collect();
    Fretboard { strings }
}
