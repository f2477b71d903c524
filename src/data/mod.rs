//! Core domain types for Gardenmate
//!
//! This module contains the data types used throughout the application for
//! representing regions, months, seasons, climate zones, and the static
//! planting reference data.

pub mod climate;
pub mod companions;
pub mod planting;
pub mod seasons;

pub use climate::resolve_climate;
pub use companions::get_companions;
pub use planting::resolve_guide;
pub use seasons::resolve_season;

use serde::Serialize;

/// Australian state or territory, identified by its postal code
///
/// Region codes arrive as free-form strings from callers; `from_code` is the
/// single point where they become typed. Codes that do not match any state
/// stay untyped (`None`) so each resolver can apply its own fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    Act,
    Nsw,
    Nt,
    Qld,
    Sa,
    Tas,
    Vic,
    Wa,
}

impl Region {
    /// Returns a slice containing all region variants.
    pub fn all() -> &'static [Region] {
        &[
            Region::Act,
            Region::Nsw,
            Region::Nt,
            Region::Qld,
            Region::Sa,
            Region::Tas,
            Region::Vic,
            Region::Wa,
        ]
    }

    /// The postal code for the region (e.g. "VIC").
    pub fn code(&self) -> &'static str {
        match self {
            Region::Act => "ACT",
            Region::Nsw => "NSW",
            Region::Nt => "NT",
            Region::Qld => "QLD",
            Region::Sa => "SA",
            Region::Tas => "TAS",
            Region::Vic => "VIC",
            Region::Wa => "WA",
        }
    }

    /// Parses a region code into a Region.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for codes that are not an Australian state or territory.
    pub fn from_code(code: &str) -> Option<Region> {
        match code.trim().to_uppercase().as_str() {
            "ACT" => Some(Region::Act),
            "NSW" => Some(Region::Nsw),
            "NT" => Some(Region::Nt),
            "QLD" => Some(Region::Qld),
            "SA" => Some(Region::Sa),
            "TAS" => Some(Region::Tas),
            "VIC" => Some(Region::Vic),
            "WA" => Some(Region::Wa),
            _ => None,
        }
    }
}

/// Calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub fn all() -> &'static [Month; 12] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ]
    }

    /// Human-readable month name.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Zero-based position in the calendar year (January = 0).
    pub fn index(&self) -> usize {
        Month::all()
            .iter()
            .position(|m| m == self)
            .unwrap_or_default()
    }

    /// Month at the given zero-based position, wrapping past December.
    pub fn from_index(index: usize) -> Month {
        Month::all()[index % 12]
    }

    /// Parses a month name into a Month.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Month> {
        let needle = name.trim().to_lowercase();
        Month::all()
            .iter()
            .find(|m| m.name().to_lowercase() == needle)
            .copied()
    }
}

/// Named season, including the sentinel for unmapped inputs
///
/// `Unknown` covers both regions absent from the season table and months a
/// malformed table fails to cover; resolvers return it instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
    Unknown,
}

impl Season {
    /// Human-readable season name.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Unknown => "Unknown",
        }
    }
}

/// Coarse climate classification used to filter plant suitability warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateZone {
    Warm,
    Cool,
}

impl ClimateZone {
    /// Lowercase label matching the wire format ("warm" / "cool").
    pub fn label(&self) -> &'static str {
        match self {
            ClimateZone::Warm => "warm",
            ClimateZone::Cool => "cool",
        }
    }
}

/// Planting recommendations for one region in one month
///
/// Uses `&'static str` for string fields to allow static initialization of
/// the guide tables; the data is immutable for the process lifetime.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlantingGuide {
    /// Summary of the month's gardening conditions in the region
    pub overview: &'static str,
    /// Plants to sow from seed this month, in recommended order
    pub sow: &'static [&'static str],
    /// Seedlings to plant out this month, in recommended order
    pub plant: &'static [&'static str],
}

/// Companion-planting reference entry for a single plant
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompanionEntry {
    /// Plant this entry describes
    pub plant: &'static str,
    /// Plants that grow well alongside it
    pub good: &'static [&'static str],
    /// Plants to keep away from it
    pub bad: &'static [&'static str],
    /// Why the pairings matter, in display order
    pub reasons: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_code_accepts_all_codes() {
        for region in Region::all() {
            assert_eq!(Region::from_code(region.code()), Some(*region));
        }
    }

    #[test]
    fn test_region_from_code_is_case_insensitive() {
        assert_eq!(Region::from_code("vic"), Some(Region::Vic));
        assert_eq!(Region::from_code(" Nsw "), Some(Region::Nsw));
    }

    #[test]
    fn test_region_from_code_rejects_unknown() {
        assert!(Region::from_code("XX").is_none());
        assert!(Region::from_code("").is_none());
        assert!(Region::from_code("Victoria").is_none());
    }

    #[test]
    fn test_month_index_roundtrip() {
        for (i, month) in Month::all().iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(Month::from_index(i), *month);
        }
    }

    #[test]
    fn test_month_from_index_wraps_past_december() {
        assert_eq!(Month::from_index(12), Month::January);
        assert_eq!(Month::from_index(13), Month::February);
        assert_eq!(Month::from_index(23), Month::December);
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(Month::from_name("January"), Some(Month::January));
        assert_eq!(Month::from_name("december"), Some(Month::December));
        assert_eq!(Month::from_name(" MAY "), Some(Month::May));
        assert!(Month::from_name("Smarch").is_none());
    }

    #[test]
    fn test_climate_zone_labels() {
        assert_eq!(ClimateZone::Warm.label(), "warm");
        assert_eq!(ClimateZone::Cool.label(), "cool");
    }

    #[test]
    fn test_climate_zone_serializes_lowercase() {
        let json = serde_json::to_string(&ClimateZone::Cool).expect("Failed to serialize");
        assert_eq!(json, "\"cool\"");
    }

    #[test]
    fn test_season_names() {
        assert_eq!(Season::Summer.name(), "Summer");
        assert_eq!(Season::Unknown.name(), "Unknown");
    }
}
