use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const MIN_VOTE_COUNT: u32 = 100;
const DETAIL_APPENDS: &str = "credits,videos,images,similar,keywords";

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("TMDB_API_KEY is not configured")]
    MissingApiKey,
    #[error("TMDb responded with {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("JSON parse failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TmdbError {
    /// The `status_message` TMDb put in its error body, if any.
    pub fn status_message(&self) -> Option<&str> {
        match self {
            TmdbError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Which upstream listing backs the coming-soon page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpcomingQuery {
    /// Releases on or after `released_from` in one original language, by popularity.
    Discover {
        language: String,
        released_from: NaiveDate,
    },
    /// TMDb's upcoming listing, best rated first.
    TopRated,
}

impl UpcomingQuery {
    /// Empty, missing and `"all"` all select the curated listing.
    pub fn from_language(language: Option<&str>, today: NaiveDate) -> Self {
        match language.map(str::trim) {
            Some(lang) if !lang.is_empty() && lang != "all" => UpcomingQuery::Discover {
                language: lang.to_string(),
                released_from: today,
            },
            _ => UpcomingQuery::TopRated,
        }
    }
}

#[async_trait]
pub trait TmdbApi: Send + Sync {
    fn has_credentials(&self) -> bool;
    async fn list_upcoming(&self, query: &UpcomingQuery) -> Result<Vec<MovieSummary>, TmdbError>;
    /// Id of the first search hit, `None` when the search is empty.
    async fn search_movie(&self, query: &str) -> Result<Option<i64>, TmdbError>;
    async fn fetch_movie_details(&self, id: i64) -> Result<MovieDetails, TmdbError>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TmdbClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Result<Self, TmdbError> {
        let user_agent = format!("cinemascope/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    fn api_key(&self) -> Result<&str, TmdbError> {
        self.api_key.as_deref().ok_or(TmdbError::MissingApiKey)
    }

    fn upcoming_url(&self, api_key: &str, query: &UpcomingQuery) -> String {
        match query {
            UpcomingQuery::Discover {
                language,
                released_from,
            } => format!(
                "{}/discover/movie?api_key={}&sort_by=popularity.desc&primary_release_date.gte={}&with_original_language={}",
                self.base_url,
                api_key,
                released_from.format("%Y-%m-%d"),
                urlencoding::encode(language)
            ),
            UpcomingQuery::TopRated => format!(
                "{}/movie/upcoming?api_key={}&sort_by=vote_average.desc&vote_count.gte={MIN_VOTE_COUNT}",
                self.base_url, api_key
            ),
        }
    }

    fn search_url(&self, api_key: &str, query: &str) -> String {
        format!(
            "{}/search/movie?api_key={}&query={}",
            self.base_url,
            api_key,
            urlencoding::encode(query)
        )
    }

    fn details_url(&self, api_key: &str, id: i64) -> String {
        format!(
            "{}/movie/{id}?api_key={}&append_to_response={DETAIL_APPENDS}",
            self.base_url, api_key
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TmdbError> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Status {
                status,
                message: status_message_from_body(&text),
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn list_upcoming(&self, query: &UpcomingQuery) -> Result<Vec<MovieSummary>, TmdbError> {
        let url = self.upcoming_url(self.api_key()?, query);
        debug!(query = ?query, "Listing upcoming movies");
        let page: Paged<MovieSummary> = self.get_json(&url).await?;
        Ok(page.results)
    }

    async fn search_movie(&self, query: &str) -> Result<Option<i64>, TmdbError> {
        let url = self.search_url(self.api_key()?, query);
        debug!(query = %query, "Searching movies");
        let page: Paged<MovieSummary> = self.get_json(&url).await?;
        Ok(page.results.first().map(|m| m.id))
    }

    async fn fetch_movie_details(&self, id: i64) -> Result<MovieDetails, TmdbError> {
        let url = self.details_url(self.api_key()?, id);
        debug!(tmdb_id = id, "Fetching movie details");
        self.get_json(&url).await
    }
}

fn status_message_from_body(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        status_message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .filter(|m| !m.trim().is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A list entry as returned by search, discover, upcoming and similar.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
}

/// `/movie/{id}` with credits, videos, images, similar and keywords appended.
/// Credits and videos are always requested, so their absence fails the decode.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub credits: Credits,
    pub videos: Paged<Video>,
    pub images: Option<Images>,
    pub similar: Option<Paged<MovieSummary>>,
    pub keywords: Option<KeywordList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub key: String,
    pub name: Option<String>,
    pub site: Option<String>,
    #[serde(rename = "type")]
    pub video_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub backdrops: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub file_path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordList {
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Keyword {
    pub name: String,
}
