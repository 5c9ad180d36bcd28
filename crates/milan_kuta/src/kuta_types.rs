//! Types for Gun Milan scoring.

use serde::{Deserialize, Serialize};

/// Fixed maximum of the Gun Milan system: the eight kuta weights 1..=8
/// sum to 36.
pub const GUN_MILAN_MAX: f64 = 36.0;

/// How the placeholder kutas (Vashya, unmatched Yoni, unmatched Graha
/// Maitri) source their draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPolicy {
    /// Draws come from a generator seeded by a hash of the ordered kundali
    /// pair: the same pair always scores the same, while distinct pairs
    /// still spread over the draw range.
    #[default]
    Seeded,
    /// Fresh thread-RNG draws on every call. Repeated scoring of the same
    /// pair can disagree; only for callers that want the legacy behavior.
    Entropy,
}

/// Qualitative verdict derived from the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Recommendation {
    /// Threshold the total: >=28 Excellent, >=20 Good, >=12 Average, else
    /// Poor. Inclusive lower bounds, checked in descending order.
    pub fn from_total(total: f64) -> Self {
        if total >= 28.0 {
            Self::Excellent
        } else if total >= 20.0 {
            Self::Good
        } else if total >= 12.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }

    /// Name of the verdict.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

/// Display band from the percentage of the 36-point maximum.
///
/// Coarser than [`Recommendation`]; the application uses it to tint a
/// score in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,
    Favorable,
    Moderate,
    Weak,
}

impl ScoreBand {
    /// Band the total by percentage of maximum: >=75% Strong, >=55%
    /// Favorable, >=35% Moderate, else Weak.
    pub fn from_total(total: f64) -> Self {
        let percentage = total / GUN_MILAN_MAX * 100.0;
        if percentage >= 75.0 {
            Self::Strong
        } else if percentage >= 55.0 {
            Self::Favorable
        } else if percentage >= 35.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Name of the band.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Favorable => "Favorable",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }
}

/// Eight-factor Gun Milan breakdown.
///
/// The eight factor keys and their maxima (1,2,3,4,5,6,7,8) are a frozen
/// contract with downstream consumers; they are never renamed or
/// reordered. `total` can carry a half point (Tara contributes 1.5 in its
/// middle band).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GunMilanScore {
    pub total: f64,
    /// Always [`GUN_MILAN_MAX`].
    pub max_points: f64,
    /// Varna kuta, 0 or 1.
    pub varna: f64,
    /// Vashya kuta, 0 or 2.
    pub vashya: f64,
    /// Tara kuta, 0, 1.5 or 3.
    pub tara: f64,
    /// Yoni kuta, 0, 2 or 4.
    pub yoni: f64,
    /// Graha Maitri kuta, 1..=5.
    pub graha_maitri: f64,
    /// Gana kuta, 0, 3 or 6.
    pub gana: f64,
    /// Bhakoot kuta, 0 or 7.
    pub bhakoot: f64,
    /// Nadi kuta, 0 or 8.
    pub nadi: f64,
    pub recommendation: Recommendation,
}
