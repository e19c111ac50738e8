use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use triage_application::SuggestInput;
use triage_domain::{Category, Suggestion};

use crate::server::error::ApiError;
use crate::server::state::SharedState;

/// `POST /api/suggest` body; absent fields read as empty and fail validation
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuggestRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub category: Category,
    pub model: String,
    pub coerced: bool,
}

impl From<Suggestion> for SuggestResponse {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            category: suggestion.category,
            model: suggestion.model,
            coerced: suggestion.coerced,
        }
    }
}

pub async fn suggest(
    State(state): State<SharedState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let Json(request) = payload?;

    // Dropping this future (client disconnect) drops the upstream call with it.
    let cancellation = state.shutdown.child_token();
    let suggestion = state
        .suggester
        .suggest(
            SuggestInput::new(request.title, request.description),
            &cancellation,
        )
        .await?;

    Ok(Json(suggestion.into()))
}
