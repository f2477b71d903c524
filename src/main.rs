//! Gardenmate - gardening companion for Australian states and territories
//!
//! Dispatches each CLI subcommand to its request handler and prints the
//! handler's JSON body. Non-success responses print to stderr and exit
//! with a failing status.

use clap::Parser;

use gardenmate::analysis::MemoryStore;
use gardenmate::api::{Api, ApiResponse};
use gardenmate::cli::{Cli, Command};
use gardenmate::lookup::WeatherClient;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let weather = cli.weather_key.as_deref().map(WeatherClient::new);
    let api = Api::new(weather, Box::new(MemoryStore::new()));

    let response = match &cli.command {
        Command::Wiki { term } => api.wiki_page(Some(term)).await,
        Command::Video { query } => api.video_top(Some(query)).await,
        Command::Oembed { url } => api.video_oembed(Some(url)).await,
        Command::Weather { city, state } => api.weather(Some(city), Some(state)).await,
        Command::Guide { region, month } => api.planting_guide(Some(region), Some(month)),
        Command::Season { region, month } => api.season(Some(region), Some(month)),
        Command::Climate { region, city } => api.climate(Some(region), Some(city)),
        Command::Companions { plant } => api.companions(Some(plant)),
        Command::Analyze { image_url, user_id } => {
            api.analyze(Some(image_url), Some(user_id)).await
        }
    };

    print_response(&response);
    if response.status >= 400 {
        std::process::exit(1);
    }
}

/// Prints the response body, to stdout on success and stderr on failure
fn print_response(response: &ApiResponse) {
    let body = serde_json::to_string_pretty(&response.body)
        .unwrap_or_else(|_| response.body.to_string());
    if response.status < 400 {
        println!("{}", body);
    } else {
        eprintln!("{}", body);
    }
}
