//! Gun Milan: the traditional 36-point compatibility score over two
//! kundali attribute sets.
//!
//! Eight weighted kuta factors (1 through 8 points, summing to 36) are
//! applied independently and summed; fixed thresholds turn the total into
//! a qualitative recommendation. Three factor branches have no attribute
//! rule and draw their points instead; see [`kuta_types::DrawPolicy`] for
//! how those draws are sourced.

pub mod kuta;
pub mod kuta_types;

pub use kuta::{
    bhakoot_kuta, gana_kuta, graha_maitri_kuta, gun_milan, gun_milan_with_rng, nadi_kuta,
    tara_kuta, varna_kuta, vashya_kuta, yoni_kuta,
};
pub use kuta_types::{DrawPolicy, GUN_MILAN_MAX, GunMilanScore, Recommendation, ScoreBand};
