//! Command-line interface parsing for Gardenmate
//!
//! One subcommand per operation. Each subcommand maps onto a single handler
//! in the `api` module and prints that handler's JSON body.

use clap::{Parser, Subcommand};

/// Gardenmate - planting calendars, climate warnings, and plant lookups
#[derive(Parser, Debug)]
#[command(name = "gardenmate")]
#[command(about = "Gardening companion for Australian states and territories")]
#[command(version)]
pub struct Cli {
    /// API key for the weather forecast provider
    #[arg(long, env = "GARDENMATE_WEATHER_KEY", global = true, hide_env_values = true)]
    pub weather_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by the CLI
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up the best-matching encyclopedia page for a term
    Wiki {
        /// Search term (e.g. "Tomato")
        term: String,
    },
    /// Find the top video result for a search query
    Video {
        /// Free-text search query
        query: String,
    },
    /// Resolve a video URL to its title
    Oembed {
        /// Full video URL
        url: String,
    },
    /// Fetch current conditions and a multi-day forecast
    Weather {
        /// City name (e.g. "Melbourne")
        city: String,
        /// State or territory code (e.g. "VIC")
        state: String,
    },
    /// Show the planting guide for a region and month
    Guide {
        /// Region code (e.g. "VIC")
        region: String,
        /// Month name (e.g. "October")
        month: String,
    },
    /// Resolve the season for a region and month
    Season {
        /// Region code
        region: String,
        /// Month name
        month: String,
    },
    /// Resolve the climate zone for a region and city
    Climate {
        /// Region code
        region: String,
        /// City name
        city: String,
    },
    /// Show companion planting advice for a plant
    Companions {
        /// Plant name (e.g. "Tomato")
        plant: String,
    },
    /// Run the plant photo analysis
    Analyze {
        /// URL of the plant photo
        image_url: String,
        /// Submitting user id
        user_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_wiki() {
        let cli = Cli::parse_from(["gardenmate", "wiki", "Tomato"]);
        match cli.command {
            Command::Wiki { term } => assert_eq!(term, "Tomato"),
            other => panic!("Expected wiki command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_guide() {
        let cli = Cli::parse_from(["gardenmate", "guide", "VIC", "October"]);
        match cli.command {
            Command::Guide { region, month } => {
                assert_eq!(region, "VIC");
                assert_eq!(month, "October");
            }
            other => panic!("Expected guide command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_weather_with_key_flag() {
        let cli = Cli::parse_from([
            "gardenmate",
            "weather",
            "Melbourne",
            "VIC",
            "--weather-key",
            "abc123",
        ]);
        assert_eq!(cli.weather_key.as_deref(), Some("abc123"));
        match cli.command {
            Command::Weather { city, state } => {
                assert_eq!(city, "Melbourne");
                assert_eq!(state, "VIC");
            }
            other => panic!("Expected weather command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_analyze() {
        let cli = Cli::parse_from([
            "gardenmate",
            "analyze",
            "https://example.com/leaf.jpg",
            "user-1",
        ]);
        match cli.command {
            Command::Analyze { image_url, user_id } => {
                assert_eq!(image_url, "https://example.com/leaf.jpg");
                assert_eq!(user_id, "user-1");
            }
            other => panic!("Expected analyze command, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["gardenmate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["gardenmate", "mow-lawn"]).is_err());
    }
}
