//! Season resolution from per-region month-range tables
//!
//! Each region maps four month-range labels (e.g. "June-August") to a season.
//! Labels are expanded into their constituent months at lookup time, handling
//! ranges that wrap past December. A malformed table never fails a request;
//! unmatched months resolve to `Season::Unknown`.

use super::{Month, Region, Season};

/// One row of a region's season table: a month range and the season it names
#[derive(Debug, Clone, Copy)]
struct SeasonRange {
    /// Range label in "Start-End" form using full month names
    label: &'static str,
    /// Season the range maps to
    season: Season,
}

/// Standard southern-hemisphere season ranges
///
/// Every state and territory currently shares this table, but lookups go
/// through `ranges_for` so a region can diverge (e.g. a wet/dry split for the
/// tropics) without touching the resolver.
static SOUTHERN_RANGES: [SeasonRange; 4] = [
    SeasonRange {
        label: "December-February",
        season: Season::Summer,
    },
    SeasonRange {
        label: "March-May",
        season: Season::Autumn,
    },
    SeasonRange {
        label: "June-August",
        season: Season::Winter,
    },
    SeasonRange {
        label: "September-November",
        season: Season::Spring,
    },
];

/// The season table for a region
fn ranges_for(region: Region) -> &'static [SeasonRange; 4] {
    match region {
        Region::Act
        | Region::Nsw
        | Region::Nt
        | Region::Qld
        | Region::Sa
        | Region::Tas
        | Region::Vic
        | Region::Wa => &SOUTHERN_RANGES,
    }
}

/// Expands a "Start-End" label into its constituent months
///
/// Wrap-around ranges (end month earlier in the calendar than the start month)
/// walk past December back to January. Returns an empty list for labels that
/// do not parse, which the resolver treats as "no match".
fn expand_range(label: &str) -> Vec<Month> {
    let (start_name, end_name) = match label.split_once('-') {
        Some(parts) => parts,
        None => return Vec::new(),
    };
    let (start, end) = match (Month::from_name(start_name), Month::from_name(end_name)) {
        (Some(start), Some(end)) => (start, end),
        _ => return Vec::new(),
    };

    let start_idx = start.index();
    let mut end_idx = end.index();
    if end_idx < start_idx {
        end_idx += 12;
    }

    (start_idx..=end_idx).map(Month::from_index).collect()
}

/// Resolves the season for a region and month
///
/// Returns `Season::Unknown` if no range in the region's table covers the
/// month, which only happens with a malformed table.
pub fn resolve_season(region: Region, month: Month) -> Season {
    for range in ranges_for(region) {
        if expand_range(range.label).contains(&month) {
            return range.season;
        }
    }
    log::warn!(
        "No season range covers {} for {}",
        month.name(),
        region.code()
    );
    Season::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_range_simple() {
        assert_eq!(
            expand_range("March-May"),
            vec![Month::March, Month::April, Month::May]
        );
    }

    #[test]
    fn test_expand_range_wraps_past_december() {
        assert_eq!(
            expand_range("December-February"),
            vec![Month::December, Month::January, Month::February]
        );
    }

    #[test]
    fn test_expand_range_single_month_span() {
        assert_eq!(expand_range("June-June"), vec![Month::June]);
    }

    #[test]
    fn test_expand_range_malformed_label() {
        assert!(expand_range("Winter").is_empty());
        assert!(expand_range("June-Smarch").is_empty());
        assert!(expand_range("").is_empty());
    }

    #[test]
    fn test_january_is_summer_via_wrap() {
        assert_eq!(resolve_season(Region::Vic, Month::January), Season::Summer);
        assert_eq!(resolve_season(Region::Qld, Month::December), Season::Summer);
        assert_eq!(resolve_season(Region::Nsw, Month::February), Season::Summer);
    }

    #[test]
    fn test_mid_year_seasons() {
        assert_eq!(resolve_season(Region::Vic, Month::April), Season::Autumn);
        assert_eq!(resolve_season(Region::Tas, Month::July), Season::Winter);
        assert_eq!(resolve_season(Region::Wa, Month::October), Season::Spring);
    }

    #[test]
    fn test_every_month_resolves_to_exactly_one_season() {
        for region in Region::all() {
            for month in Month::all() {
                let matches = ranges_for(*region)
                    .iter()
                    .filter(|range| expand_range(range.label).contains(month))
                    .count();
                assert_eq!(
                    matches,
                    1,
                    "{} should map to exactly one season in {}",
                    month.name(),
                    region.code()
                );
            }
        }
    }

    #[test]
    fn test_no_month_resolves_unknown() {
        for region in Region::all() {
            for month in Month::all() {
                assert_ne!(resolve_season(*region, *month), Season::Unknown);
            }
        }
    }
}
