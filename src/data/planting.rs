//! Static planting calendar data and the region/month resolver
//!
//! Guides are keyed by (region, month). Coverage is intentionally uneven:
//! months not yet populated for a region are an expected steady-state
//! condition, reported to the caller as absence rather than an error.

use super::{Month, PlantingGuide, Region};

/// One planting calendar entry
struct GuideRow {
    region: Region,
    month: Month,
    guide: PlantingGuide,
}

/// Planting calendar entries for all populated (region, month) pairs
///
/// Victoria and New South Wales carry full twelve-month calendars; the
/// remaining states cover the main growing season so far.
static GUIDES: &[GuideRow] = &[
    // --- Victoria: full year ---
    GuideRow {
        region: Region::Vic,
        month: Month::January,
        guide: PlantingGuide {
            overview: "Peak summer. Water deeply in the morning and shade young seedlings on extreme days.",
            sow: &["Beetroot", "Carrot", "Lettuce", "Radish", "Silverbeet"],
            plant: &["Basil", "Capsicum", "Leek", "Tomato"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::February,
        guide: PlantingGuide {
            overview: "Late summer. Start brassicas in trays for autumn planting and keep up the mulch.",
            sow: &["Beetroot", "Broccoli", "Cabbage", "Carrot", "Cauliflower"],
            plant: &["Leek", "Lettuce", "Silverbeet"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::March,
        guide: PlantingGuide {
            overview: "Autumn begins. Soil is still warm, ideal for establishing leafy greens.",
            sow: &["Broad Bean", "Carrot", "Onion", "Spinach", "Turnip"],
            plant: &["Broccoli", "Cabbage", "Cauliflower", "Lettuce"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::April,
        guide: PlantingGuide {
            overview: "Cooler nights. Garlic goes in now; lift and divide perennial herbs.",
            sow: &["Broad Bean", "Pea", "Radish", "Spinach"],
            plant: &["Garlic", "Onion", "Silverbeet"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::May,
        guide: PlantingGuide {
            overview: "Late autumn. Slow growth; protect seedlings from early frosts.",
            sow: &["Broad Bean", "Pea"],
            plant: &["Garlic", "Onion"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::June,
        guide: PlantingGuide {
            overview: "Winter. Prune deciduous fruit trees and plan the spring beds.",
            sow: &["Broad Bean", "Pea"],
            plant: &["Rhubarb Crowns", "Strawberry Runners"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::July,
        guide: PlantingGuide {
            overview: "Midwinter. Bare-rooted trees and berries can be planted while dormant.",
            sow: &["Broad Bean", "Pea"],
            plant: &["Asparagus Crowns", "Bare-rooted Fruit Trees"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::August,
        guide: PlantingGuide {
            overview: "Winter's end. Start tomatoes and capsicums indoors for spring.",
            sow: &["Beetroot", "Carrot", "Lettuce", "Pea", "Tomato (indoors)"],
            plant: &["Potato", "Strawberry Runners"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::September,
        guide: PlantingGuide {
            overview: "Spring. Frost risk lingers; harden off seedlings before planting out.",
            sow: &["Bean", "Beetroot", "Carrot", "Pumpkin", "Zucchini"],
            plant: &["Lettuce", "Potato", "Silverbeet"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::October,
        guide: PlantingGuide {
            overview: "Mid spring. Main planting month once the frosts have passed.",
            sow: &["Bean", "Corn", "Cucumber", "Pumpkin", "Zucchini"],
            plant: &["Basil", "Capsicum", "Eggplant", "Tomato"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::November,
        guide: PlantingGuide {
            overview: "Late spring. Successive sowings keep the salad bed going into summer.",
            sow: &["Bean", "Carrot", "Corn", "Lettuce", "Radish"],
            plant: &["Basil", "Cucumber", "Tomato", "Zucchini"],
        },
    },
    GuideRow {
        region: Region::Vic,
        month: Month::December,
        guide: PlantingGuide {
            overview: "Early summer. Mulch everything and stake the tomatoes before they sprawl.",
            sow: &["Bean", "Beetroot", "Carrot", "Lettuce"],
            plant: &["Basil", "Leek", "Sweet Corn Seedlings"],
        },
    },
    // --- New South Wales: full year ---
    GuideRow {
        region: Region::Nsw,
        month: Month::January,
        guide: PlantingGuide {
            overview: "Hot and humid on the coast. Watch for fungal disease after storms.",
            sow: &["Bean", "Beetroot", "Carrot", "Radish", "Sweet Corn"],
            plant: &["Basil", "Capsicum", "Eggplant", "Lettuce"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::February,
        guide: PlantingGuide {
            overview: "Last of the summer sowings; start autumn brassicas in trays.",
            sow: &["Bean", "Broccoli", "Cabbage", "Carrot", "Leek"],
            plant: &["Lettuce", "Silverbeet"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::March,
        guide: PlantingGuide {
            overview: "Autumn. Ideal month for leafy greens and root crops.",
            sow: &["Beetroot", "Carrot", "Onion", "Spinach"],
            plant: &["Broccoli", "Cabbage", "Cauliflower"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::April,
        guide: PlantingGuide {
            overview: "Mild days. Garlic and broad beans go straight into the ground.",
            sow: &["Broad Bean", "Pea", "Spinach", "Turnip"],
            plant: &["Garlic", "Onion"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::May,
        guide: PlantingGuide {
            overview: "Late autumn. Growth slows inland; coastal beds still take greens.",
            sow: &["Broad Bean", "Pea", "Radish"],
            plant: &["Garlic", "Lettuce"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::June,
        guide: PlantingGuide {
            overview: "Winter. Prune, weed, and feed the citrus.",
            sow: &["Broad Bean", "Pea"],
            plant: &["Rhubarb Crowns", "Strawberry Runners"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::July,
        guide: PlantingGuide {
            overview: "Midwinter. Plant bare-rooted stock; chit seed potatoes for spring.",
            sow: &["Broad Bean", "Pea"],
            plant: &["Asparagus Crowns", "Bare-rooted Fruit Trees"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::August,
        guide: PlantingGuide {
            overview: "Spring is close. Start frost-tender crops under cover.",
            sow: &["Beetroot", "Capsicum (indoors)", "Carrot", "Tomato (indoors)"],
            plant: &["Potato", "Strawberry Runners"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::September,
        guide: PlantingGuide {
            overview: "Spring. Coastal gardens can plant out tomatoes late in the month.",
            sow: &["Bean", "Cucumber", "Pumpkin", "Sweet Corn", "Zucchini"],
            plant: &["Lettuce", "Potato", "Tomato (coastal)"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::October,
        guide: PlantingGuide {
            overview: "Mid spring. Everything summer-fruiting goes in now.",
            sow: &["Bean", "Corn", "Cucumber", "Melon", "Pumpkin"],
            plant: &["Basil", "Capsicum", "Eggplant", "Tomato"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::November,
        guide: PlantingGuide {
            overview: "Late spring. Keep water up to cucurbits as days heat up.",
            sow: &["Bean", "Carrot", "Lettuce", "Radish", "Sweet Corn"],
            plant: &["Basil", "Cucumber", "Zucchini"],
        },
    },
    GuideRow {
        region: Region::Nsw,
        month: Month::December,
        guide: PlantingGuide {
            overview: "Summer. Mulch deeply; sow quick salad crops in partial shade.",
            sow: &["Bean", "Beetroot", "Lettuce", "Radish"],
            plant: &["Basil", "Leek"],
        },
    },
    // --- Queensland: subtropical calendar, main season populated ---
    GuideRow {
        region: Region::Qld,
        month: Month::March,
        guide: PlantingGuide {
            overview: "The wet eases. Best planting window of the year begins in the subtropics.",
            sow: &["Bean", "Beetroot", "Carrot", "Lettuce", "Tomato"],
            plant: &["Capsicum", "Eggplant", "Sweet Potato"],
        },
    },
    GuideRow {
        region: Region::Qld,
        month: Month::April,
        guide: PlantingGuide {
            overview: "Dry season. Tomatoes and most vegetables thrive now.",
            sow: &["Broccoli", "Cabbage", "Carrot", "Pea", "Tomato"],
            plant: &["Lettuce", "Silverbeet"],
        },
    },
    GuideRow {
        region: Region::Qld,
        month: Month::May,
        guide: PlantingGuide {
            overview: "Mild and dry. Keep succession-sowing salad and root crops.",
            sow: &["Beetroot", "Carrot", "Lettuce", "Onion", "Radish"],
            plant: &["Broccoli", "Cabbage", "Cauliflower"],
        },
    },
    GuideRow {
        region: Region::Qld,
        month: Month::June,
        guide: PlantingGuide {
            overview: "Cool season. Frost-free coastal beds keep producing all winter.",
            sow: &["Carrot", "Lettuce", "Pea", "Tomato (frost-free)"],
            plant: &["Capsicum", "Potato"],
        },
    },
    GuideRow {
        region: Region::Qld,
        month: Month::September,
        guide: PlantingGuide {
            overview: "Warming fast. Get cucurbits in before the heat and humidity return.",
            sow: &["Bean", "Cucumber", "Pumpkin", "Sweet Corn", "Zucchini"],
            plant: &["Basil", "Capsicum", "Sweet Potato"],
        },
    },
    GuideRow {
        region: Region::Qld,
        month: Month::October,
        guide: PlantingGuide {
            overview: "Pre-wet heat. Choose heat-tolerant varieties and mulch hard.",
            sow: &["Bean", "Okra", "Pumpkin", "Sweet Corn"],
            plant: &["Eggplant", "Ginger", "Sweet Potato"],
        },
    },
    // --- South Australia ---
    GuideRow {
        region: Region::Sa,
        month: Month::April,
        guide: PlantingGuide {
            overview: "Autumn break. Plant garlic once the first rains have soaked in.",
            sow: &["Broad Bean", "Pea", "Spinach"],
            plant: &["Garlic", "Onion"],
        },
    },
    GuideRow {
        region: Region::Sa,
        month: Month::September,
        guide: PlantingGuide {
            overview: "Spring. Frosts persist in the hills; plant out on the plains first.",
            sow: &["Bean", "Beetroot", "Carrot", "Zucchini"],
            plant: &["Lettuce", "Potato", "Silverbeet"],
        },
    },
    GuideRow {
        region: Region::Sa,
        month: Month::October,
        guide: PlantingGuide {
            overview: "Mid spring. Main tomato planting month for Adelaide gardens.",
            sow: &["Bean", "Corn", "Cucumber", "Pumpkin"],
            plant: &["Basil", "Capsicum", "Tomato"],
        },
    },
    GuideRow {
        region: Region::Sa,
        month: Month::November,
        guide: PlantingGuide {
            overview: "Drying out. Deep weekly watering beats daily sprinkles.",
            sow: &["Bean", "Carrot", "Lettuce"],
            plant: &["Basil", "Eggplant", "Zucchini"],
        },
    },
    // --- Western Australia ---
    GuideRow {
        region: Region::Wa,
        month: Month::April,
        guide: PlantingGuide {
            overview: "Autumn rains arrive in the south-west; the winter garden starts now.",
            sow: &["Broad Bean", "Carrot", "Pea", "Spinach"],
            plant: &["Broccoli", "Cauliflower", "Garlic"],
        },
    },
    GuideRow {
        region: Region::Wa,
        month: Month::August,
        guide: PlantingGuide {
            overview: "Winter's end. Perth beds can start spring sowings early.",
            sow: &["Beetroot", "Carrot", "Lettuce", "Tomato (indoors)"],
            plant: &["Potato", "Silverbeet"],
        },
    },
    GuideRow {
        region: Region::Wa,
        month: Month::September,
        guide: PlantingGuide {
            overview: "Spring. Sandy soils drain fast, so feed and mulch generously.",
            sow: &["Bean", "Corn", "Cucumber", "Pumpkin", "Zucchini"],
            plant: &["Basil", "Capsicum", "Tomato"],
        },
    },
    GuideRow {
        region: Region::Wa,
        month: Month::October,
        guide: PlantingGuide {
            overview: "Mid spring. Last comfortable month to establish seedlings before the dry heat.",
            sow: &["Bean", "Carrot", "Lettuce", "Sweet Corn"],
            plant: &["Cucumber", "Eggplant", "Zucchini"],
        },
    },
    // --- Tasmania ---
    GuideRow {
        region: Region::Tas,
        month: Month::September,
        guide: PlantingGuide {
            overview: "Cold spring. Sow under cover; frosts run well into the season.",
            sow: &["Beetroot", "Carrot", "Lettuce", "Pea"],
            plant: &["Potato", "Strawberry Runners"],
        },
    },
    GuideRow {
        region: Region::Tas,
        month: Month::October,
        guide: PlantingGuide {
            overview: "Spring proper. Hardy seedlings can go out; hold the tomatoes back.",
            sow: &["Bean (late)", "Beetroot", "Carrot", "Silverbeet"],
            plant: &["Broccoli", "Cabbage", "Lettuce"],
        },
    },
    GuideRow {
        region: Region::Tas,
        month: Month::November,
        guide: PlantingGuide {
            overview: "Frost risk fades. Tomatoes and other tender crops go out now.",
            sow: &["Bean", "Carrot", "Pumpkin", "Zucchini"],
            plant: &["Basil", "Capsicum", "Tomato"],
        },
    },
    GuideRow {
        region: Region::Tas,
        month: Month::December,
        guide: PlantingGuide {
            overview: "Early summer. Long mild days; keep succession sowings going.",
            sow: &["Bean", "Beetroot", "Lettuce", "Radish"],
            plant: &["Cucumber", "Leek", "Zucchini"],
        },
    },
    // --- Australian Capital Territory ---
    GuideRow {
        region: Region::Act,
        month: Month::October,
        guide: PlantingGuide {
            overview: "Spring in the capital. Wait for the last frost before planting tomatoes.",
            sow: &["Bean", "Beetroot", "Carrot", "Zucchini"],
            plant: &["Lettuce", "Potato", "Silverbeet"],
        },
    },
    GuideRow {
        region: Region::Act,
        month: Month::November,
        guide: PlantingGuide {
            overview: "Frosts done. Main month for planting out the summer garden.",
            sow: &["Bean", "Corn", "Cucumber", "Pumpkin"],
            plant: &["Basil", "Capsicum", "Tomato"],
        },
    },
    // --- Northern Territory: tropical, dry-season entries ---
    GuideRow {
        region: Region::Nt,
        month: Month::May,
        guide: PlantingGuide {
            overview: "Dry season begins. The Top End's best vegetable months start now.",
            sow: &["Bean", "Cucumber", "Lettuce", "Tomato"],
            plant: &["Capsicum", "Eggplant", "Sweet Potato"],
        },
    },
    GuideRow {
        region: Region::Nt,
        month: Month::June,
        guide: PlantingGuide {
            overview: "Peak dry season. Water daily; almost everything grows.",
            sow: &["Bean", "Carrot", "Lettuce", "Sweet Corn"],
            plant: &["Basil", "Tomato"],
        },
    },
];

/// Resolves the planting guide for a region and month
///
/// Returns `None` for any (region, month) pair that has no entry in the
/// calendar. Absent data is normal, so the miss is logged and surfaced as
/// absence rather than an error.
pub fn resolve_guide(region: Region, month: Month) -> Option<&'static PlantingGuide> {
    let found = GUIDES
        .iter()
        .find(|row| row.region == region && row.month == month)
        .map(|row| &row.guide);
    if found.is_none() {
        log::info!(
            "No planting guide for {} in {}",
            region.code(),
            month.name()
        );
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vic_and_nsw_cover_the_full_year() {
        for month in Month::all() {
            assert!(
                resolve_guide(Region::Vic, *month).is_some(),
                "VIC missing {}",
                month.name()
            );
            assert!(
                resolve_guide(Region::Nsw, *month).is_some(),
                "NSW missing {}",
                month.name()
            );
        }
    }

    #[test]
    fn test_resolve_guide_returns_expected_entry() {
        let guide = resolve_guide(Region::Vic, Month::October).expect("VIC October should exist");
        assert!(guide.overview.contains("spring"));
        assert!(guide.plant.contains(&"Tomato"));
    }

    #[test]
    fn test_unpopulated_pair_is_absent_not_an_error() {
        // NT only has dry-season entries
        assert!(resolve_guide(Region::Nt, Month::January).is_none());
        assert!(resolve_guide(Region::Act, Month::June).is_none());
    }

    #[test]
    fn test_no_duplicate_region_month_pairs() {
        for (i, row) in GUIDES.iter().enumerate() {
            let dup = GUIDES
                .iter()
                .skip(i + 1)
                .any(|other| other.region == row.region && other.month == row.month);
            assert!(
                !dup,
                "Duplicate guide for {} {}",
                row.region.code(),
                row.month.name()
            );
        }
    }

    #[test]
    fn test_every_guide_has_content() {
        for row in GUIDES {
            assert!(!row.guide.overview.is_empty());
            assert!(
                !row.guide.sow.is_empty() || !row.guide.plant.is_empty(),
                "Guide for {} {} recommends nothing",
                row.region.code(),
                row.month.name()
            );
        }
    }

    #[test]
    fn test_every_region_has_at_least_one_guide() {
        for region in Region::all() {
            assert!(
                GUIDES.iter().any(|row| row.region == *region),
                "{} has no guides at all",
                region.code()
            );
        }
    }
}
