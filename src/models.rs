use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMovieCard {
    pub id: i64,
    pub title: String,
    pub poster_url: String,
    pub release_date: String,
    pub overview: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub poster_hint: String,
    pub release_year: String,
    pub rating: String,
    pub duration: String,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    pub imdb_rating: String,
    pub imdb_votes: String,
    pub storyline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<PersonLink>,
    pub writers: Vec<CreditLink>,
    pub top_cast: Vec<CastCredit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    pub videos: Vec<VideoClip>,
    pub photos: Vec<Photo>,
    pub related_movies: Vec<RelatedMovie>,
    pub metascore: f64,
    pub awards_summary: String,
    pub plot_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub did_you_know: DidYouKnow,
    pub technical_specs: TechnicalSpecs,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PersonLink {
    pub name: String,
    pub href: String,
}

/// A crew credit; `role` is the specific job title.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreditLink {
    pub name: String,
    pub role: String,
    pub href: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CastCredit {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub href: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoClip {
    #[serde(rename = "type")]
    pub label: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub hint: String,
    pub duration: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Photo {
    pub url: String,
    pub hint: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedMovie {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    pub likes: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DidYouKnow {
    pub trivia: Vec<String>,
    pub goofs: Vec<String>,
    pub quotes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSpecs {
    pub runtime: String,
    pub sound_mix: String,
    pub aspect_ratio: String,
}
