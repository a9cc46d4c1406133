use axum::Json;
use axum::extract::{Path, State};
use tracing::warn;

use super::AppState;
use crate::analyzers::types::{FacultyDetails, FacultySuggestions, Leaderboard};
use crate::analyzers::{faculty_details, faculty_suggestions, leaderboard as rank, list_faculties};
use crate::error::QueryError;

pub(super) async fn faculties(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(list_faculties(&state.dataset))
}

pub(super) async fn faculty(
    State(state): State<AppState>,
    Path(fid): Path<String>,
) -> Result<Json<FacultyDetails>, QueryError> {
    let mut rng = rand::thread_rng();
    faculty_details(&state.dataset, &fid, &mut rng)
        .map(Json)
        .inspect_err(|e| warn!(faculty_id = %fid, error = %e, "Faculty lookup failed"))
}

pub(super) async fn suggestions(
    State(state): State<AppState>,
    Path(fid): Path<String>,
) -> Result<Json<FacultySuggestions>, QueryError> {
    faculty_suggestions(&state.dataset, &fid)
        .map(Json)
        .inspect_err(|e| warn!(faculty_id = %fid, error = %e, "Suggestion lookup failed"))
}

pub(super) async fn missing_faculty_id() -> QueryError {
    QueryError::InvalidFacultyId
}

pub(super) async fn leaderboard(State(state): State<AppState>) -> Json<Leaderboard> {
    Json(rank(&state.dataset))
}
