//! Gameplay modifier flags.
//!
//! Bit positions follow the published mod table of the game:
//! Easy(1), Hidden(3), HardRock(4), DoubleTime(6), HalfTime(8),
//! Flashlight(10), ScoreV2(29).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ModFlag {
    #[strum(serialize = "EZ")]
    Easy,
    #[strum(serialize = "HD")]
    Hidden,
    #[strum(serialize = "HR")]
    HardRock,
    #[strum(serialize = "DT")]
    DoubleTime,
    #[strum(serialize = "HT")]
    HalfTime,
    #[strum(serialize = "FL")]
    Flashlight,
    #[strum(serialize = "V2")]
    ScoreV2,
}

impl ModFlag {
    pub fn bit(self) -> u32 {
        match self {
            Self::Easy => 1 << 1,
            Self::Hidden => 1 << 3,
            Self::HardRock => 1 << 4,
            Self::DoubleTime => 1 << 6,
            Self::HalfTime => 1 << 8,
            Self::Flashlight => 1 << 10,
            Self::ScoreV2 => 1 << 29,
        }
    }

    /// Legacy score multiplier; `None` for mods that do not affect it.
    pub fn score_multiplier(self) -> Option<f64> {
        match self {
            Self::Easy => Some(0.5),
            Self::HardRock => Some(1.06),
            Self::Hidden => Some(1.06),
            Self::Flashlight => Some(1.12),
            Self::DoubleTime => Some(1.12),
            Self::HalfTime => Some(0.3),
            Self::ScoreV2 => None,
        }
    }

    pub fn acronym(self) -> &'static str {
        self.into()
    }
}

/// Raw mod bitmask as stored on a replay.
///
/// Unknown bits are preserved untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mods(pub u32);

impl Mods {
    pub const NONE: Mods = Mods(0);

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, flag: ModFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn insert(&mut self, flag: ModFlag) {
        self.0 |= flag.bit();
    }

    pub fn with(mut self, flag: ModFlag) -> Self {
        self.insert(flag);
        self
    }

    pub fn union(self, other: Mods) -> Self {
        Self(self.0 | other.0)
    }

    pub fn easy(self) -> bool {
        self.contains(ModFlag::Easy)
    }

    pub fn hard_rock(self) -> bool {
        self.contains(ModFlag::HardRock)
    }

    pub fn score_v2(self) -> bool {
        self.contains(ModFlag::ScoreV2)
    }

    pub fn flags(self) -> impl Iterator<Item = ModFlag> {
        ModFlag::iter().filter(move |flag| self.contains(*flag))
    }

    /// Product of the legacy score multipliers of every active flag.
    ///
    /// Speed mods are not mutually exclusive here: DoubleTime and HalfTime
    /// together multiply both factors in.
    pub fn score_multiplier(self) -> f64 {
        self.flags()
            .filter_map(ModFlag::score_multiplier)
            .product()
    }

    /// Pairs of active flags that cannot occur together in normal play.
    pub fn conflicts(self) -> Vec<(ModFlag, ModFlag)> {
        const EXCLUSIVE: [(ModFlag, ModFlag); 2] = [
            (ModFlag::DoubleTime, ModFlag::HalfTime),
            (ModFlag::Easy, ModFlag::HardRock),
        ];
        EXCLUSIVE
            .into_iter()
            .filter(|(a, b)| self.contains(*a) && self.contains(*b))
            .collect()
    }
}

impl FromStr for Mods {
    type Err = Error;

    /// Parses acronyms such as `"HDDT"`, `"hd,dt"` or `"NM"`.
    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s
            .chars()
            .filter(|c| !matches!(c, ',' | '+' | ' '))
            .collect();
        if compact.is_empty() || compact.eq_ignore_ascii_case("NM") {
            return Ok(Self::NONE);
        }
        if compact.len() % 2 != 0 {
            return Err(Error::InvalidMod(s.to_string()));
        }

        let mut mods = Self::NONE;
        for chunk in compact.as_bytes().chunks(2) {
            let acronym = std::str::from_utf8(chunk).map_err(|_| Error::InvalidMod(s.to_string()))?;
            let flag =
                ModFlag::from_str(acronym).map_err(|_| Error::InvalidMod(acronym.to_string()))?;
            mods.insert(flag);
        }
        Ok(mods)
    }
}

impl fmt::Display for Mods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut any = false;
        for flag in self.flags() {
            write!(f, "{}", flag.acronym())?;
            any = true;
        }
        if !any {
            write!(f, "NM")?;
        }
        Ok(())
    }
}
