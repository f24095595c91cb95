//! Diatonic triads and their quality.

use serde::{Deserialize, Serialize};

use super::pitch::Pitch;

/// Triad quality. Only the three qualities a diatonic stack can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
}

impl ChordType {
    pub fn name(&self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            ChordType::Major => "maj",
            ChordType::Minor => "min",
            ChordType::Diminished => "dim",
        }
    }
}

/// Function of a pitch within a triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordRole {
    Root,
    Third,
    Fifth,
}

impl ChordRole {
    pub const ALL: [ChordRole; 3] = [ChordRole::Root, ChordRole::Third, ChordRole::Fifth];

    /// Slot position within the triad (root = 0)
    pub fn index(&self) -> u8 {
        match self {
            ChordRole::Root => 0,
            ChordRole::Third => 1,
            ChordRole::Fifth => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChordRole::Root => "root",
            ChordRole::Third => "third",
            ChordRole::Fifth => "fifth",
        }
    }
}

/// Three pitches in slot order: root, third, fifth.
///
/// Slots are positional; nothing checks that the pitches actually form a
/// stacked-thirds shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triad([Pitch; 3]);

impl Triad {
    pub fn new(root: Pitch, third: Pitch, fifth: Pitch) -> Self {
        Self([root, third, fifth])
    }

    pub fn root(&self) -> Pitch {
        self.0[0]
    }

    pub fn third(&self) -> Pitch {
        self.0[1]
    }

    pub fn fifth(&self) -> Pitch {
        self.0[2]
    }

    pub fn pitches(&self) -> &[Pitch; 3] {
        &self.0
    }

    pub fn get(&self, role: ChordRole) -> Pitch {
        self.0[role.index() as usize]
    }

    pub fn quality(&self) -> ChordType {
        classify(self)
    }

    /// Display label such as `"D min"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.root().name(), self.quality().short_name())
    }
}

impl From<[Pitch; 3]> for Triad {
    fn from(pitches: [Pitch; 3]) -> Self {
        Self(pitches)
    }
}

/// Classify a triad by its root-relative distances.
///
/// A tritone to the fifth slot means diminished; otherwise a minor third to
/// the third slot means minor; anything else is treated as major. Order
/// sensitive: slot 0 is taken as the root.
pub fn classify(triad: &Triad) -> ChordType {
    let root = triad.root();
    if root.semitones_to(triad.fifth()) == 6 {
        ChordType::Diminished
    } else if root.semitones_to(triad.third()) == 3 {
        ChordType::Minor
    } else {
        ChordType::Major
    }
}
