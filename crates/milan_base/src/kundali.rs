//! Kundali (birth-chart attribute set) derivation.
//!
//! The simplified model keys every attribute on the birth date alone:
//! day-of-month and zero-based month feed small modular formulas that index
//! the fixed tables. Birth time is carried on the profile record but does
//! not shift any attribute.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::birth::BirthDetails;
use crate::error::BirthError;
use crate::nakshatra::{ALL_NAKSHATRAS, Nakshatra};
use crate::rashi::{ALL_RASHIS, Rashi};
use crate::varga::{Gana, Nadi, Varna, Yoni};

/// Derived attribute set for one person.
///
/// Immutable once computed; the application attaches it to the profile for
/// display and feeds pairs of these into the Gun Milan scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kundali {
    /// Moon sign.
    pub moon_sign: Rashi,
    /// Lunar asterism.
    pub nakshatra: Nakshatra,
    /// Always equal to `moon_sign`; kept as a separate field because
    /// profile consumers read both keys.
    pub rashi: Rashi,
    /// Temperament class.
    pub gana: Gana,
    /// Humor class.
    pub nadi: Nadi,
    /// Caste-analog class.
    pub varna: Varna,
    /// Animal-nature class.
    pub yoni: Yoni,
    /// Compatibility index in 1..=9.
    pub tara: u8,
}

/// Derive the kundali attribute set from birth details.
///
/// Pure and total: any valid calendar date yields an attribute set, and the
/// same date always yields the same set.
pub fn kundali_from_birth(birth: &BirthDetails) -> Kundali {
    let day = birth.date.day() as usize;
    let month = birth.date.month0() as usize;

    let moon_sign_index = (day + month) % 12;
    let nakshatra_index = (day * 3 + month * 2) % 27;

    let moon_sign = ALL_RASHIS[moon_sign_index];
    let nakshatra = ALL_NAKSHATRAS[nakshatra_index];

    Kundali {
        moon_sign,
        nakshatra,
        rashi: moon_sign,
        gana: nakshatra.gana(),
        nadi: nakshatra.nadi(),
        varna: moon_sign.varna(),
        yoni: nakshatra.yoni(),
        tara: nakshatra.tara(),
    }
}

/// Convenience: parse the wire strings and derive in one step.
pub fn kundali_from_strings(date: &str, time: &str) -> Result<Kundali, BirthError> {
    let birth = BirthDetails::parse(date, time)?;
    Ok(kundali_from_birth(&birth))
}
