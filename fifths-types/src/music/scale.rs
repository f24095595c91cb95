//! Seven-note diatonic scales built from a tonic and a mode.

use serde::{Deserialize, Serialize};

use super::chord::{classify, ChordRole, ChordType, Triad};
use super::mode::Mode;
use super::pitch::Pitch;

/// Notes per diatonic scale.
pub const DEGREE_COUNT: usize = 7;

/// Degree labels by scale position. Not case-shifted by chord quality.
pub const DEGREE_NAMES: [&str; DEGREE_COUNT] = ["i", "ii", "iii", "iv", "v", "vi", "vii"];

/// One position of a [`Scale`]: its pitch, diatonic triad and chord quality.
///
/// Only produced by [`build_scale`]; the chord role is the one field that
/// changes afterwards, through annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleDegree {
    pitch: Pitch,
    degree: u8,
    triad: Triad,
    chord_type: ChordType,
    chord_role: Option<ChordRole>,
}

impl ScaleDegree {
    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn name(&self) -> &'static str {
        self.pitch.name()
    }

    pub fn index(&self) -> u8 {
        self.pitch.index()
    }

    /// Position in the scale, 0 = tonic
    pub fn degree(&self) -> u8 {
        self.degree
    }

    pub fn degree_name(&self) -> &'static str {
        DEGREE_NAMES[self.degree as usize]
    }

    pub fn triad(&self) -> Triad {
        self.triad
    }

    pub fn chord_type(&self) -> ChordType {
        self.chord_type
    }

    /// Set only while this degree belongs to the selected chord
    pub fn chord_role(&self) -> Option<ChordRole> {
        self.chord_role
    }

    pub(crate) fn set_chord_role(&mut self, role: Option<ChordRole>) {
        self.chord_role = role;
    }
}

/// Exactly seven degrees in ascending scale order, degree 0 being the tonic.
///
/// Deserializing rebuilds the scale from its tonic and rejects anything that
/// is not a diatonic scale as [`build_scale`] would produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScaleRecord")]
pub struct Scale {
    degrees: [ScaleDegree; DEGREE_COUNT],
}

impl Scale {
    pub fn degrees(&self) -> &[ScaleDegree; DEGREE_COUNT] {
        &self.degrees
    }

    pub(crate) fn degrees_mut(&mut self) -> &mut [ScaleDegree; DEGREE_COUNT] {
        &mut self.degrees
    }

    pub fn tonic(&self) -> Pitch {
        self.degrees[0].pitch
    }

    /// Degree at scale position `degree`, wrapping modulo 7.
    pub fn degree(&self, degree: u8) -> &ScaleDegree {
        &self.degrees[degree as usize % DEGREE_COUNT]
    }

    pub fn pitches(&self) -> [Pitch; DEGREE_COUNT] {
        self.degrees.map(|d| d.pitch)
    }

    pub fn contains(&self, pitch: Pitch) -> bool {
        self.find(pitch).is_some()
    }

    /// The degree carrying `pitch`, if the pitch is in the scale.
    pub fn find(&self, pitch: Pitch) -> Option<&ScaleDegree> {
        self.degrees.iter().find(|d| d.pitch == pitch)
    }

    /// Semitone steps between consecutive degrees, the last one wrapping back to the tonic.
    pub fn intervals(&self) -> [u8; DEGREE_COUNT] {
        let mut out = [0; DEGREE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            let next = self.degrees[(i + 1) % DEGREE_COUNT].pitch;
            *slot = self.degrees[i].pitch.semitones_to(next);
        }
        out
    }

    /// Degrees currently carrying a chord role.
    pub fn chord_tones(&self) -> impl Iterator<Item = &ScaleDegree> {
        self.degrees.iter().filter(|d| d.chord_role.is_some())
    }
}

/// Why a serialized scale was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// Degrees do not match any mode built on the first degree's pitch
    NotDiatonic,
    /// The same chord role appears on more than one degree
    RepeatedRole(ChordRole),
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotDiatonic => write!(f, "degrees do not form a diatonic scale"),
            Self::RepeatedRole(role) => write!(f, "chord role {} assigned twice", role.name()),
        }
    }
}

impl std::error::Error for ScaleError {}

#[derive(Deserialize)]
struct DegreeRecord {
    pitch: Pitch,
    degree: u8,
    triad: Triad,
    chord_type: ChordType,
    chord_role: Option<ChordRole>,
}

#[derive(Deserialize)]
struct ScaleRecord {
    degrees: [DegreeRecord; DEGREE_COUNT],
}

impl TryFrom<ScaleRecord> for Scale {
    type Error = ScaleError;

    fn try_from(record: ScaleRecord) -> Result<Self, Self::Error> {
        let tonic = record.degrees[0].pitch;
        let mut scale = Mode::ALL
            .into_iter()
            .map(|mode| build_scale(tonic, mode))
            .find(|built| {
                built.degrees.iter().zip(&record.degrees).all(|(b, r)| {
                    b.pitch == r.pitch
                        && b.degree == r.degree
                        && b.triad == r.triad
                        && b.chord_type == r.chord_type
                })
            })
            .ok_or(ScaleError::NotDiatonic)?;

        for role in ChordRole::ALL {
            let count = record
                .degrees
                .iter()
                .filter(|r| r.chord_role == Some(role))
                .count();
            if count > 1 {
                return Err(ScaleError::RepeatedRole(role));
            }
        }

        for (degree, r) in scale.degrees.iter_mut().zip(&record.degrees) {
            degree.chord_role = r.chord_role;
        }
        Ok(scale)
    }
}

/// Build the scale of `mode` starting on `tonic`.
///
/// Each degree's triad stacks scale positions i, i+2 and i+4 (wrapping within
/// the seven notes), so its quality follows the mode rather than a fixed shape.
pub fn build_scale(tonic: Pitch, mode: Mode) -> Scale {
    let mut raw = [tonic; DEGREE_COUNT];
    for i in 1..DEGREE_COUNT {
        raw[i] = raw[i - 1].transpose(mode.step((i - 1) as u8));
    }

    let degrees = std::array::from_fn(|i| {
        let triad = Triad::new(
            raw[i],
            raw[(i + 2) % DEGREE_COUNT],
            raw[(i + 4) % DEGREE_COUNT],
        );
        ScaleDegree {
            pitch: raw[i],
            degree: i as u8,
            triad,
            chord_type: classify(&triad),
            chord_role: None,
        }
    });

    Scale { degrees }
}
