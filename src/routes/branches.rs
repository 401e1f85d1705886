//! Branch routes: list and per-branch inventory summary.

use axum::extract::{Path, State};
use axum::response::Json;
use stockdesk_client::net::types::{Branch, InventorySummary};

use super::auth::SessionToken;
use crate::backend::BackendError;
use crate::state::AppState;

/// `GET /api/branches`
pub async fn list(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<Vec<Branch>>, BackendError> {
    let branches = state.backend.list_branches(&token).await?;
    tracing::debug!(count = branches.len(), "branches listed");
    Ok(Json(branches))
}

/// `GET /api/branches/{id}/summary`
pub async fn summary(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
    Path(branch_id): Path<String>,
) -> Result<Json<InventorySummary>, BackendError> {
    state.backend.branch_summary(&token, &branch_id).await.map(Json)
}
