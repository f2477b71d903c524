//! Climate zone resolution
//!
//! Classifies a location as "warm" or "cool" for plant suitability warnings.
//! A city-level override beats the region-level default, which beats the
//! global default of warm. The ordering and the default are part of the
//! contract: they decide which warnings a user with no configured location
//! data sees.

use super::{ClimateZone, Region};

/// City-level overrides, exact name match
///
/// When a city appears here its region is irrelevant to the result.
static CITY_ZONES: [(&str, ClimateZone); 8] = [
    ("Melbourne", ClimateZone::Cool),
    ("Hobart", ClimateZone::Cool),
    ("Launceston", ClimateZone::Cool),
    ("Canberra", ClimateZone::Cool),
    ("Ballarat", ClimateZone::Cool),
    ("Sydney", ClimateZone::Warm),
    ("Brisbane", ClimateZone::Warm),
    ("Darwin", ClimateZone::Warm),
];

/// Region-level defaults for cities without an override
fn region_zone(region: Region) -> ClimateZone {
    match region {
        Region::Vic | Region::Tas | Region::Act => ClimateZone::Cool,
        Region::Nsw | Region::Nt | Region::Qld | Region::Sa | Region::Wa => ClimateZone::Warm,
    }
}

/// Resolves the climate zone for a region code and city name
///
/// Check order: city override, then region default, then `Warm`. The region
/// arrives untyped here because an unrecognized code still needs the global
/// default rather than an error.
pub fn resolve_climate(region_code: &str, city: &str) -> ClimateZone {
    if let Some((_, zone)) = CITY_ZONES.iter().find(|(name, _)| *name == city) {
        return *zone;
    }
    if let Some(region) = Region::from_code(region_code) {
        return region_zone(region);
    }
    log::debug!(
        "No climate data for region '{}' city '{}', defaulting to warm",
        region_code,
        city
    );
    ClimateZone::Warm
}
