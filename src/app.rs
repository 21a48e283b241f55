use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{MovieDetail, UpcomingMovieCard};
use crate::shape;
use crate::tmdb::{TmdbApi, TmdbClient, UpcomingQuery};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<dyn TmdbApi>,
}

#[derive(Debug, Deserialize)]
pub struct ComingSoonParams {
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

pub async fn run_server(config: Config) -> Result<()> {
    if config.tmdb_api_key.is_none() {
        warn!("TMDB_API_KEY is not set; catalog endpoints will answer with a configuration error");
    }
    let tmdb = TmdbClient::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone())
        .context("Failed to build TMDb HTTP client")?;
    let state = AppState {
        tmdb: Arc::new(tmdb),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/coming-soon", get(coming_soon))
        .route("/api/search", get(search))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn coming_soon(
    State(state): State<AppState>,
    Query(params): Query<ComingSoonParams>,
) -> AppResult<Json<Vec<UpcomingMovieCard>>> {
    if !state.tmdb.has_credentials() {
        error!("TMDb API key is not configured");
        return Err(AppError::MissingApiKey);
    }

    let query = UpcomingQuery::from_language(params.language.as_deref(), Utc::now().date_naive());
    let results = state.tmdb.list_upcoming(&query).await.map_err(|e| {
        error!(query = ?query, "Error fetching upcoming movies from TMDb: {}", e);
        AppError::from(e)
    })?;

    let fetched = results.len();
    let cards = shape::upcoming_cards(results);
    info!(
        query = ?query,
        fetched,
        returned = cards.len(),
        "Served coming-soon listing"
    );
    Ok(Json(cards))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<MovieDetail>> {
    let query = match params.query.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => return Err(AppError::MissingParameter("query")),
    };

    if !state.tmdb.has_credentials() {
        error!("TMDb API key is not configured");
        return Err(AppError::MissingApiKey);
    }

    let movie_id = match state.tmdb.search_movie(&query).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            info!("No TMDb match for '{}'", query);
            return Err(AppError::NotFound);
        }
        Err(e) => {
            error!("Error searching TMDb for '{}': {}", query, e);
            return Err(e.into());
        }
    };

    let details = state.tmdb.fetch_movie_details(movie_id).await.map_err(|e| {
        error!(tmdb_id = movie_id, "Error fetching movie details from TMDb: {}", e);
        AppError::from(e)
    })?;

    match shape::movie_detail(details) {
        Some(detail) => {
            info!("Matched '{}' -> '{}' (tmdb id {})", query, detail.title, movie_id);
            Ok(Json(detail))
        }
        None => {
            warn!(tmdb_id = movie_id, "TMDb record for '{}' could not be formatted", query);
            Err(AppError::FormatFailed)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
