use serde::{Deserialize, Serialize};

/// Whole/half step pattern of the major scale. Sums to 12.
pub const MAJOR_STEPS: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Diatonic mode, expressed as a rotation of [`MAJOR_STEPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Lydian,
    Major,
    Mixolydian,
    Dorian,
    Minor,
    Phrygian,
    Locrian,
}

impl Mode {
    /// Catalog order, brightest to darkest.
    pub const ALL: [Mode; 7] = [
        Mode::Lydian,
        Mode::Major,
        Mode::Mixolydian,
        Mode::Dorian,
        Mode::Minor,
        Mode::Phrygian,
        Mode::Locrian,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Lydian => "Lydian",
            Mode::Major => "Major",
            Mode::Mixolydian => "Mixolydian",
            Mode::Dorian => "Dorian",
            Mode::Minor => "Minor",
            Mode::Phrygian => "Phrygian",
            Mode::Locrian => "Locrian",
        }
    }

    /// Church-mode name (Major is Ionian, Minor is Aeolian)
    pub fn modal_name(&self) -> &'static str {
        match self {
            Mode::Major => "Ionian",
            Mode::Minor => "Aeolian",
            other => other.name(),
        }
    }

    /// Offset into [`MAJOR_STEPS`] at which this mode starts reading.
    pub fn index(&self) -> u8 {
        match self {
            Mode::Major => 0,
            Mode::Dorian => 1,
            Mode::Phrygian => 2,
            Mode::Lydian => 3,
            Mode::Mixolydian => 4,
            Mode::Minor => 5,
            Mode::Locrian => 6,
        }
    }

    /// Step in semitones taken after scale position `position` (wraps modulo 7).
    pub fn step(&self, position: u8) -> u8 {
        MAJOR_STEPS[((position % 7 + self.index()) % 7) as usize]
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        match name.trim().to_lowercase().as_str() {
            "lydian" => Some(Mode::Lydian),
            "major" | "ionian" => Some(Mode::Major),
            "mixolydian" => Some(Mode::Mixolydian),
            "dorian" => Some(Mode::Dorian),
            "minor" | "aeolian" => Some(Mode::Minor),
            "phrygian" => Some(Mode::Phrygian),
            "locrian" => Some(Mode::Locrian),
            _ => None,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Major
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed mode catalog.
pub fn list_modes() -> [Mode; 7] {
    Mode::ALL
}
