//! Nakshatra (lunar asterism) table.
//!
//! The 27 nakshatras from Ashwini to Revati, selected by index in the
//! calendar-keyed model. The 0-based index drives four classifications:
//! gana and nadi (index mod 3 — the two are perfectly correlated by
//! construction), yoni (index mod 14) and tara (index mod 9, shifted to
//! the range 1..=9).

use serde::{Deserialize, Serialize};

use crate::varga::{ALL_YONIS, Gana, Nadi, Yoni};

/// The 27 nakshatras from Ashwini to Revati.
///
/// Multi-word names serialize with spaces ("Purva Phalguni"), matching the
/// labels the profile store carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// Gana (temperament) class: index modulo 3.
    pub const fn gana(self) -> Gana {
        match self.index() % 3 {
            0 => Gana::Deva,
            1 => Gana::Manushya,
            _ => Gana::Rakshasa,
        }
    }

    /// Nadi (humor) class: index modulo 3.
    ///
    /// Same residue as [`Nakshatra::gana`], so the two classes are
    /// perfectly correlated over the table.
    pub const fn nadi(self) -> Nadi {
        match self.index() % 3 {
            0 => Nadi::Adi,
            1 => Nadi::Madhya,
            _ => Nadi::Antya,
        }
    }

    /// Yoni (animal nature) class: index modulo 14 over the yoni table.
    pub const fn yoni(self) -> Yoni {
        ALL_YONIS[(self.index() % 14) as usize]
    }

    /// Tara (compatibility index): index modulo 9, shifted into 1..=9.
    pub const fn tara(self) -> u8 {
        self.index() % 9 + 1
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn nakshatra_names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn gana_and_nadi_share_residue() {
        for n in ALL_NAKSHATRAS {
            assert_eq!(n.gana().index(), n.nadi().index(), "classes of {}", n.name());
        }
    }

    #[test]
    fn gana_cycle() {
        assert_eq!(Nakshatra::Ashwini.gana(), Gana::Deva);
        assert_eq!(Nakshatra::Bharani.gana(), Gana::Manushya);
        assert_eq!(Nakshatra::Krittika.gana(), Gana::Rakshasa);
        assert_eq!(Nakshatra::Rohini.gana(), Gana::Deva);
        assert_eq!(Nakshatra::Revati.gana(), Gana::Rakshasa);
    }

    #[test]
    fn yoni_wraps_after_fourteen() {
        // Index 14 (Swati) wraps back to the first yoni table entry.
        assert_eq!(Nakshatra::Swati.yoni(), Nakshatra::Ashwini.yoni());
        assert_eq!(Nakshatra::Ashwini.yoni(), Yoni::Horse);
        assert_eq!(Nakshatra::Dhanishtha.yoni(), Yoni::Buffalo); // 22 % 14 = 8
    }

    #[test]
    fn tara_in_range_for_all() {
        for n in ALL_NAKSHATRAS {
            let t = n.tara();
            assert!((1..=9).contains(&t), "tara of {} = {t}", n.name());
        }
    }

    #[test]
    fn tara_wraps_after_nine() {
        assert_eq!(Nakshatra::Ashwini.tara(), 1);
        assert_eq!(Nakshatra::Ashlesha.tara(), 9); // index 8
        assert_eq!(Nakshatra::Magha.tara(), 1); // index 9 wraps
    }
}
