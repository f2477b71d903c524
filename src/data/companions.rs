//! Companion planting reference table
//!
//! Static read-only data keyed by plant name. Lookup is case-insensitive;
//! the stored name is the display form.

use super::CompanionEntry;

/// Companion planting entries for common vegetable-garden plants
static COMPANIONS: &[CompanionEntry] = &[
    CompanionEntry {
        plant: "Tomato",
        good: &["Basil", "Carrot", "Parsley", "Marigold"],
        bad: &["Potato", "Fennel", "Corn"],
        reasons: &[
            "Basil repels whitefly and improves flavour",
            "Potatoes share blight with tomatoes",
            "Fennel inhibits tomato growth",
        ],
    },
    CompanionEntry {
        plant: "Basil",
        good: &["Tomato", "Capsicum", "Oregano"],
        bad: &["Rue", "Sage"],
        reasons: &[
            "Thrives in the same warm, moist conditions as tomatoes",
            "Strong scent confuses aphids and whitefly",
        ],
    },
    CompanionEntry {
        plant: "Carrot",
        good: &["Onion", "Leek", "Lettuce", "Tomato"],
        bad: &["Dill", "Parsnip"],
        reasons: &[
            "Onions and leeks mask the carrot scent from carrot fly",
            "Dill can cross-pollinate and stunt carrots",
        ],
    },
    CompanionEntry {
        plant: "Onion",
        good: &["Carrot", "Beetroot", "Lettuce", "Tomato"],
        bad: &["Bean", "Pea"],
        reasons: &[
            "Deters carrot fly when interplanted with carrots",
            "Legumes and alliums stunt each other",
        ],
    },
    CompanionEntry {
        plant: "Bean",
        good: &["Corn", "Cucumber", "Potato", "Marigold"],
        bad: &["Onion", "Garlic", "Fennel"],
        reasons: &[
            "Fixes nitrogen that heavy feeders like corn use",
            "Alliums inhibit legume root bacteria",
        ],
    },
    CompanionEntry {
        plant: "Corn",
        good: &["Bean", "Pumpkin", "Cucumber"],
        bad: &["Tomato"],
        reasons: &[
            "The three sisters: corn supports beans, pumpkin shades the soil",
            "Tomato and corn compete for the same nutrients and share earworm",
        ],
    },
    CompanionEntry {
        plant: "Potato",
        good: &["Bean", "Cabbage", "Marigold"],
        bad: &["Tomato", "Cucumber", "Pumpkin"],
        reasons: &[
            "Beans deter Colorado beetle",
            "Tomatoes and potatoes spread blight to each other",
        ],
    },
    CompanionEntry {
        plant: "Cabbage",
        good: &["Potato", "Onion", "Dill", "Chamomile"],
        bad: &["Strawberry", "Tomato"],
        reasons: &[
            "Dill attracts wasps that prey on cabbage moth",
            "Strawberries encourage pests that attack brassicas",
        ],
    },
    CompanionEntry {
        plant: "Lettuce",
        good: &["Carrot", "Radish", "Strawberry", "Cucumber"],
        bad: &["Parsley"],
        reasons: &[
            "Radishes drive aphids away from lettuce",
            "Parsley crowds lettuce and competes for moisture",
        ],
    },
    CompanionEntry {
        plant: "Cucumber",
        good: &["Bean", "Corn", "Lettuce", "Sunflower"],
        bad: &["Potato", "Sage"],
        reasons: &[
            "Corn and sunflowers give cucumbers a living trellis",
            "Aromatic herbs slow cucumber growth",
        ],
    },
    CompanionEntry {
        plant: "Pumpkin",
        good: &["Corn", "Bean", "Marigold"],
        bad: &["Potato"],
        reasons: &[
            "Sprawling vines suppress weeds beneath corn",
            "Competes with potatoes for space and water",
        ],
    },
    CompanionEntry {
        plant: "Strawberry",
        good: &["Lettuce", "Spinach", "Borage"],
        bad: &["Cabbage", "Broccoli"],
        reasons: &[
            "Borage strengthens strawberries and attracts pollinators",
            "Brassicas compete for the same shallow root zone",
        ],
    },
];

/// Looks up the companion entry for a plant by name
///
/// Matching is case-insensitive; returns `None` for plants not in the table.
pub fn get_companions(plant: &str) -> Option<&'static CompanionEntry> {
    let needle = plant.trim().to_lowercase();
    COMPANIONS
        .iter()
        .find(|entry| entry.plant.to_lowercase() == needle)
}

/// All companion entries, in table order
#[allow(dead_code)]
pub fn all_companions() -> &'static [CompanionEntry] {
    COMPANIONS
}
