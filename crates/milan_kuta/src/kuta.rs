//! The eight kuta factor rules and the 36-point Gun Milan total.
//!
//! Each kuta is an independent rule over the two attribute sets, bounded
//! by its position weight (Varna 1 .. Nadi 8). Varna is directional:
//! swapping the pair can change its point. Vashya has no attribute rule at
//! all, and Yoni and Graha Maitri fall back to a draw when their attribute
//! comparison misses; those draws come from the caller's [`DrawPolicy`].

use log::debug;
use milan_base::{Gana, Kundali};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use xxhash_rust::xxh3::xxh3_64;

use crate::kuta_types::{DrawPolicy, GUN_MILAN_MAX, GunMilanScore, Recommendation};

/// Varna kuta (1 point): granted when `a`'s varna rank index is at least
/// `b`'s under the fixed order Brahmin=0 .. Shudra=3. Index comparison,
/// not alphabetic, and not symmetric.
pub fn varna_kuta(a: &Kundali, b: &Kundali) -> f64 {
    if a.varna.index() >= b.varna.index() {
        1.0
    } else {
        0.0
    }
}

/// Vashya kuta (2 points): a placeholder draw, 2 with probability 0.7.
pub fn vashya_kuta(rng: &mut impl Rng) -> f64 {
    if rng.random::<f64>() > 0.3 { 2.0 } else { 0.0 }
}

/// Tara kuta (3 points): banded on the distance between the two tara
/// indices. Distance <=2 scores 3, <=4 scores 1.5, farther scores 0.
pub fn tara_kuta(a: &Kundali, b: &Kundali) -> f64 {
    let diff = a.tara.abs_diff(b.tara);
    if diff <= 2 {
        3.0
    } else if diff <= 4 {
        1.5
    } else {
        0.0
    }
}

/// Yoni kuta (4 points): full points on an exact animal match, otherwise a
/// 50/50 placeholder draw of 2 or 0.
pub fn yoni_kuta(a: &Kundali, b: &Kundali, rng: &mut impl Rng) -> f64 {
    if a.yoni == b.yoni {
        4.0
    } else if rng.random::<f64>() > 0.5 {
        2.0
    } else {
        0.0
    }
}

/// Graha Maitri kuta (5 points): full points on a moon-sign match,
/// otherwise a placeholder draw uniform in 1..=4.
pub fn graha_maitri_kuta(a: &Kundali, b: &Kundali, rng: &mut impl Rng) -> f64 {
    if a.moon_sign == b.moon_sign {
        5.0
    } else {
        rng.random_range(1..=4) as f64
    }
}

/// Gana kuta (6 points): 6 on a class match, 3 for a Deva/Manushya pairing
/// in either order, 0 for any pairing involving Rakshasa across classes.
pub fn gana_kuta(a: &Kundali, b: &Kundali) -> f64 {
    if a.gana == b.gana {
        6.0
    } else if matches!(
        (a.gana, b.gana),
        (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva)
    ) {
        3.0
    } else {
        0.0
    }
}

/// Bhakoot kuta (7 points): zero when the rashi index distance is 0, 6 or
/// 8 over the fixed 12-sign order, otherwise the full 7.
pub fn bhakoot_kuta(a: &Kundali, b: &Kundali) -> f64 {
    let diff = a.rashi.index().abs_diff(b.rashi.index());
    if diff == 0 || diff == 6 || diff == 8 {
        0.0
    } else {
        7.0
    }
}

/// Nadi kuta (8 points): differing nadi classes score the full 8; a shared
/// class scores zero. Same-nadi pairings are the inauspicious case.
pub fn nadi_kuta(a: &Kundali, b: &Kundali) -> f64 {
    if a.nadi != b.nadi { 8.0 } else { 0.0 }
}

/// Hash the ordered kundali pair into a draw seed.
fn pair_seed(a: &Kundali, b: &Kundali) -> u64 {
    let mut bytes = [0u8; 14];
    for (chunk, k) in bytes.chunks_exact_mut(7).zip([a, b]) {
        chunk[0] = k.moon_sign.index();
        chunk[1] = k.nakshatra.index();
        chunk[2] = k.gana.index();
        chunk[3] = k.nadi.index();
        chunk[4] = k.varna.index();
        chunk[5] = k.yoni.index();
        chunk[6] = k.tara;
    }
    xxh3_64(&bytes)
}

/// Score two kundalis with an explicit draw source.
///
/// The placeholder kutas consume the generator in a fixed order (Vashya,
/// then Yoni, then Graha Maitri), so a seeded generator yields a stable
/// score.
pub fn gun_milan_with_rng(a: &Kundali, b: &Kundali, rng: &mut impl Rng) -> GunMilanScore {
    let varna = varna_kuta(a, b);
    let vashya = vashya_kuta(rng);
    let tara = tara_kuta(a, b);
    let yoni = yoni_kuta(a, b, rng);
    let graha_maitri = graha_maitri_kuta(a, b, rng);
    let gana = gana_kuta(a, b);
    let bhakoot = bhakoot_kuta(a, b);
    let nadi = nadi_kuta(a, b);

    let total = varna + vashya + tara + yoni + graha_maitri + gana + bhakoot + nadi;
    debug!("gun milan total {total} of {GUN_MILAN_MAX}");

    GunMilanScore {
        total,
        max_points: GUN_MILAN_MAX,
        varna,
        vashya,
        tara,
        yoni,
        graha_maitri,
        gana,
        bhakoot,
        nadi,
        recommendation: Recommendation::from_total(total),
    }
}

/// Score two kundalis under the given draw policy.
pub fn gun_milan(a: &Kundali, b: &Kundali, policy: DrawPolicy) -> GunMilanScore {
    match policy {
        DrawPolicy::Seeded => {
            let seed = pair_seed(a, b);
            debug!("seeded draws for pair, seed {seed:#018x}");
            gun_milan_with_rng(a, b, &mut ChaCha8Rng::seed_from_u64(seed))
        }
        DrawPolicy::Entropy => gun_milan_with_rng(a, b, &mut rand::rng()),
    }
}
