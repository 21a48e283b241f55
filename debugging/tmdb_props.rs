//! Run the coming-soon or search pipeline against TMDb and print the shaped JSON.
//! Usage:
//!   cargo run --bin tmdb_props -- search <title words...>
//!   cargo run --bin tmdb_props -- upcoming [language]
//! Requires TMDB_API_KEY in the environment (.env supported).

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use cinemascope::config::Config;
use cinemascope::shape;
use cinemascope::tmdb::{TmdbApi, TmdbClient, UpcomingQuery};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Search,
    Upcoming,
}

impl FromStr for Command {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "search" => Ok(Command::Search),
            "upcoming" => Ok(Command::Upcoming),
            _ => Err(anyhow!("command must be 'search' or 'upcoming'")),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin tmdb_props -- search <title words...>");
        eprintln!("       cargo run --bin tmdb_props -- upcoming [language]");
        std::process::exit(1);
    }

    let command = Command::from_str(&args[1])?;
    let config = Config::from_env()?;
    if config.tmdb_api_key.is_none() {
        return Err(anyhow!("TMDB_API_KEY not set"));
    }
    let client = TmdbClient::new(config.tmdb_api_key, config.tmdb_api_url)
        .context("Failed to build TMDb HTTP client")?;

    let output = match command {
        Command::Search => {
            let query = args[2..].join(" ");
            if query.trim().is_empty() {
                return Err(anyhow!("missing title to search for"));
            }
            let id = client
                .search_movie(&query)
                .await?
                .ok_or_else(|| anyhow!("No TMDb movie found for '{}'", query))?;
            let details = client.fetch_movie_details(id).await?;
            let detail = shape::movie_detail(details)
                .ok_or_else(|| anyhow!("TMDb record {} could not be formatted", id))?;
            serde_json::to_string_pretty(&detail)?
        }
        Command::Upcoming => {
            let query = UpcomingQuery::from_language(
                args.get(2).map(String::as_str),
                Utc::now().date_naive(),
            );
            eprintln!("Query: {:?}", query);
            let results = client.list_upcoming(&query).await?;
            let fetched = results.len();
            let cards = shape::upcoming_cards(results);
            eprintln!("Fetched {} entries, {} with posters", fetched, cards.len());
            serde_json::to_string_pretty(&cards)?
        }
    };

    println!("{output}");
    Ok(())
}
