use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::tmdb::TmdbError;

pub const MISSING_KEY_MESSAGE: &str =
    "TMDb API key is not configured. Please add TMDB_API_KEY to your environment variables.";
pub const MISSING_KEY_HINT: &str = "Get a free API key from https://www.themoviedb.org/settings/api";
const UPSTREAM_FALLBACK: &str = "Failed to fetch from TMDb";
const FETCH_FALLBACK: &str = "Failed to fetch movie data";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("TMDb API key is not configured")]
    MissingApiKey,

    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error("Movie not found")]
    NotFound,

    #[error("TMDb error: {0}")]
    Upstream(#[from] TmdbError),

    #[error("Failed to format movie data")]
    FormatFailed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MissingApiKey | AppError::Upstream(_) | AppError::FormatFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::MissingApiKey | AppError::Upstream(TmdbError::MissingApiKey) => json!({
                "error": MISSING_KEY_MESSAGE,
                "hint": MISSING_KEY_HINT,
            }),
            AppError::MissingParameter(name) => json!({
                "error": format!("{} parameter is required", capitalize(name)),
            }),
            AppError::Upstream(err @ TmdbError::Status { .. }) => json!({
                "error": err.status_message().unwrap_or(UPSTREAM_FALLBACK),
            }),
            AppError::Upstream(_) => json!({ "error": FETCH_FALLBACK }),
            AppError::NotFound | AppError::FormatFailed => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type AppResult<T> = Result<T, AppError>;
