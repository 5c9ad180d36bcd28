//! Fixed attribute tables and kundali derivation for Gun Milan matching.
//!
//! This crate provides:
//! - The 12-rashi and 27-nakshatra tables with their classification methods
//! - The four kuta attribute classes (gana, nadi, varna, yoni)
//! - Birth-detail parsing and the calendar-keyed kundali derivation
//!
//! The derivation is a simplified calendar rule: every attribute is a pure
//! function of the birth date, with no ephemeris queries involved.

pub mod birth;
pub mod error;
pub mod kundali;
pub mod nakshatra;
pub mod rashi;
pub mod varga;

pub use birth::BirthDetails;
pub use error::BirthError;
pub use kundali::{Kundali, kundali_from_birth, kundali_from_strings};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra};
pub use rashi::{ALL_RASHIS, Rashi};
pub use varga::{ALL_GANAS, ALL_NADIS, ALL_VARNAS, ALL_YONIS, Gana, Nadi, Varna, Yoni};
