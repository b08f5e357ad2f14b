use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Path, State},
};
use database::{ShowDetail, ShowSummary};
use std::sync::Arc;

/// # GET /api/genres
/// Fetches every distinct genre label, sorted ascending.
pub async fn get_genres(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, AppError> {
    let genres = state.repo.list_genres().await?;
    Ok(Json(genres))
}

/// # GET /api/genres/:genre
/// Fetches the shows linked to a genre, ordered by name ascending.
///
/// A genre with no linked shows answers `200 []`, never a 404; the raw path
/// segment goes straight into the parameterized query.
pub async fn get_shows_by_genre(
    Path(genre): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ShowSummary>>, AppError> {
    let shows = state.repo.shows_by_genre(&genre).await?;
    Ok(Json(shows))
}

/// # GET /api/tvshow/:tvid
/// Fetches the full row for one show.
///
/// The path segment is coerced to an integer; a non-numeric segment becomes
/// a sentinel id that matches no row, so it falls into the ordinary 404 path
/// rather than a distinct 400.
pub async fn get_show(
    Path(tvid): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ShowDetail>, AppError> {
    let id = tvid.parse::<i64>().unwrap_or(-1);
    match state.repo.show_by_id(id).await? {
        Some(show) => Ok(Json(show)),
        None => Err(AppError::NotFound(format!("tvid {tvid} not found"))),
    }
}
