//! Rashi (zodiac sign) table.
//!
//! The zodiac is divided into 12 fixed signs. In the calendar-keyed model
//! the moon sign is selected by index, so the table carries only names and
//! ordering; no longitude arithmetic is involved.
//!
//! The 0-based index order (Mesha = 0 .. Meena = 11) is load-bearing: the
//! varna class is the index modulo 4, and the Bhakoot kuta measures index
//! distance over this order.

use serde::{Deserialize, Serialize};

use crate::varga::Varna;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
///
/// Serializes as the Western sign name; that is the label profile
/// consumers store and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    #[serde(rename = "Aries")]
    Mesha,
    #[serde(rename = "Taurus")]
    Vrishabha,
    #[serde(rename = "Gemini")]
    Mithuna,
    #[serde(rename = "Cancer")]
    Karka,
    #[serde(rename = "Leo")]
    Simha,
    #[serde(rename = "Virgo")]
    Kanya,
    #[serde(rename = "Libra")]
    Tula,
    #[serde(rename = "Scorpio")]
    Vrischika,
    #[serde(rename = "Sagittarius")]
    Dhanu,
    #[serde(rename = "Capricorn")]
    Makara,
    #[serde(rename = "Aquarius")]
    Kumbha,
    #[serde(rename = "Pisces")]
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Varna class of the rashi: index modulo 4 over the fixed varna order.
    pub const fn varna(self) -> Varna {
        match self.index() % 4 {
            0 => Varna::Brahmin,
            1 => Varna::Kshatriya,
            2 => Varna::Vaishya,
            _ => Varna::Shudra,
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}
