use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3146";

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when TMDB_API_KEY is unset or blank. The server still starts and
    /// answers every catalog request with a configuration error.
    pub tmdb_api_key: Option<String>,
    pub tmdb_api_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tmdb_api_key = lookup("TMDB_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let tmdb_api_url = lookup("TMDB_API_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_TMDB_API_URL.to_string());
        let raw_addr = lookup("BIND_ADDR")
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .with_context(|| format!("BIND_ADDR is not a valid socket address: {raw_addr}"))?;

        Ok(Self {
            tmdb_api_key,
            tmdb_api_url,
            bind_addr,
        })
    }
}
