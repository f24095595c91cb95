use serde::{Deserialize, Serialize};

/// Number of pitch classes in the chromatic universe.
pub const PITCH_COUNT: u8 = 12;

/// Pitch class in the fixed 12-tone chromatic universe (sharps only).
///
/// Equality is by pitch class; every variant maps to exactly one index in 0..12.
/// Serialized as its display name (`"C#"`); `"Cs"` is accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pitch {
    C,
    #[serde(rename = "C#", alias = "Cs")]
    Cs,
    D,
    #[serde(rename = "D#", alias = "Ds")]
    Ds,
    E,
    F,
    #[serde(rename = "F#", alias = "Fs")]
    Fs,
    G,
    #[serde(rename = "G#", alias = "Gs")]
    Gs,
    A,
    #[serde(rename = "A#", alias = "As")]
    As,
    B,
}

impl Pitch {
    /// Chromatic order starting at C.
    pub const ALL: [Pitch; 12] = [
        Pitch::C,
        Pitch::Cs,
        Pitch::D,
        Pitch::Ds,
        Pitch::E,
        Pitch::F,
        Pitch::Fs,
        Pitch::G,
        Pitch::Gs,
        Pitch::A,
        Pitch::As,
        Pitch::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pitch::C => "C",
            Pitch::Cs => "C#",
            Pitch::D => "D",
            Pitch::Ds => "D#",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::Fs => "F#",
            Pitch::G => "G",
            Pitch::Gs => "G#",
            Pitch::A => "A",
            Pitch::As => "A#",
            Pitch::B => "B",
        }
    }

    /// Semitone position above C, in 0..12
    pub fn index(&self) -> u8 {
        match self {
            Pitch::C => 0,
            Pitch::Cs => 1,
            Pitch::D => 2,
            Pitch::Ds => 3,
            Pitch::E => 4,
            Pitch::F => 5,
            Pitch::Fs => 6,
            Pitch::G => 7,
            Pitch::Gs => 8,
            Pitch::A => 9,
            Pitch::As => 10,
            Pitch::B => 11,
        }
    }

    /// Look up a pitch by semitone index. Wraps modulo 12.
    pub fn from_index(index: u8) -> Pitch {
        Pitch::ALL[(index % PITCH_COUNT) as usize]
    }

    /// Parse a display name. Accepts both `C#` and `Cs` spellings.
    pub fn from_name(name: &str) -> Option<Pitch> {
        match name.trim() {
            "C" => Some(Pitch::C),
            "C#" | "Cs" => Some(Pitch::Cs),
            "D" => Some(Pitch::D),
            "D#" | "Ds" => Some(Pitch::Ds),
            "E" => Some(Pitch::E),
            "F" => Some(Pitch::F),
            "F#" | "Fs" => Some(Pitch::Fs),
            "G" => Some(Pitch::G),
            "G#" | "Gs" => Some(Pitch::Gs),
            "A" => Some(Pitch::A),
            "A#" | "As" => Some(Pitch::As),
            "B" => Some(Pitch::B),
            _ => None,
        }
    }

    /// Move up by `semitones`, wrapping within the octave.
    pub fn transpose(self, semitones: u8) -> Pitch {
        Pitch::from_index((self.index() + semitones % PITCH_COUNT) % PITCH_COUNT)
    }

    /// Ascending circular distance in semitones from `self` up to `other`.
    pub fn semitones_to(self, other: Pitch) -> u8 {
        let (a, b) = (self.index(), other.index());
        if b >= a {
            b - a
        } else {
            b + PITCH_COUNT - a
        }
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed chromatic catalog, indices 0..11.
pub fn list_pitches() -> [Pitch; 12] {
    Pitch::ALL
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pitch_all_has_12() {
        assert_eq!(list_pitches().len(), 12);
    }

    #[test]
    fn pitch_names_unique() {
        let names: HashSet<&str> = Pitch::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn pitch_indices_0_to_11() {
        let indices: Vec<u8> = Pitch::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(indices, (0..12).collect::<Vec<u8>>());
    }

    #[test]
    fn from_index_inverts_index() {
        for p in Pitch::ALL {
            assert_eq!(Pitch::from_index(p.index()), p);
        }
        assert_eq!(Pitch::from_index(12), Pitch::C);
        assert_eq!(Pitch::from_index(19), Pitch::G);
    }

    #[test]
    fn parse_names() {
        assert_eq!(Pitch::from_name("C"), Some(Pitch::C));
        assert_eq!(Pitch::from_name("C#"), Some(Pitch::Cs));
        assert_eq!(Pitch::from_name("Fs"), Some(Pitch::Fs));
        assert_eq!(Pitch::from_name(" A# "), Some(Pitch::As));
        assert_eq!(Pitch::from_name("Db"), None);
        assert_eq!(Pitch::from_name("H"), None);
    }

    #[test]
    fn transpose_wraps() {
        assert_eq!(Pitch::C.transpose(7), Pitch::G);
        assert_eq!(Pitch::A.transpose(3), Pitch::C);
        assert_eq!(Pitch::B.transpose(1), Pitch::C);
        assert_eq!(Pitch::E.transpose(12), Pitch::E);
        assert_eq!(Pitch::E.transpose(255), Pitch::E.transpose(255 % 12));
    }

    #[test]
    fn semitones_to_is_ascending_only() {
        assert_eq!(Pitch::C.semitones_to(Pitch::G), 7);
        assert_eq!(Pitch::G.semitones_to(Pitch::C), 5);
        assert_eq!(Pitch::B.semitones_to(Pitch::F), 6);
        assert_eq!(Pitch::D.semitones_to(Pitch::D), 0);
    }

    #[test]
    fn serialized_form_is_display_name() {
        for p in Pitch::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.name()));
        }
        let parsed: Pitch = serde_json::from_str("\"Gs\"").unwrap();
        assert_eq!(parsed, Pitch::Gs);
    }

    #[test]
    fn display_uses_sharp_name() {
        assert_eq!(Pitch::Gs.to_string(), "G#");
    }
}
