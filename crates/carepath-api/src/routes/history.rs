use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carepath_core::models::conversation::ConversationTurn;
use carepath_core::models::symptom_check::{SymptomCheck, SymptomCheckSummary};
use carepath_core::models::triage::{TriageResult, TriageSummary};
use carepath_core::store_keys;
use carepath_storage::json;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveHistoryRequest {
    pub symptoms: Vec<String>,
    pub triage_result: TriageResult,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResponse {
    pub message: &'static str,
    pub symptom_check_id: Uuid,
}

pub async fn save_to_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(req): ApiJson<SaveHistoryRequest>,
) -> Result<(StatusCode, Json<SavedResponse>), ApiError> {
    let now = jiff::Timestamp::now();
    let check = SymptomCheck {
        id: Uuid::new_v4(),
        user_handle: user.handle,
        symptoms: req.symptoms,
        conversation: req.conversation_history,
        triage_result: TriageSummary::from(&req.triage_result),
        recommended_facilities: req.triage_result.recommended_facilities,
        created_at: now,
        updated_at: now,
    };

    let key = store_keys::symptom_check(&check.user_handle, check.id)?;
    json::save(state.store.as_ref(), &key, &check).await?;
    tracing::info!(id = %check.id, severity = %check.triage_result.severity, "symptom check saved");

    Ok((
        StatusCode::CREATED,
        Json(SavedResponse {
            message: "Symptom check saved to history",
            symptom_check_id: check.id,
        }),
    ))
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
    pub skip: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub limit: usize,
    pub skip: usize,
    pub has_more: bool,
}

#[derive(Serialize)]
pub struct HistoryPage {
    pub history: Vec<SymptomCheckSummary>,
    pub pagination: Pagination,
}

/// The caller's checks, newest first, without conversations.
pub async fn list_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<HistoryQuery>,
) -> Result<Json<HistoryPage>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let skip = query.skip.unwrap_or(0);

    let prefix = store_keys::symptom_checks_prefix(&user.handle)?;
    let mut checks: Vec<SymptomCheck> = json::load_all(state.store.as_ref(), &prefix).await?;
    checks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = checks.len();
    let history = checks
        .into_iter()
        .skip(skip)
        .take(limit)
        .map(SymptomCheckSummary::from)
        .collect();

    Ok(Json(HistoryPage {
        history,
        pagination: Pagination {
            total,
            limit,
            skip,
            has_more: total > skip.saturating_add(limit),
        },
    }))
}

pub async fn get_symptom_check(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SymptomCheck>, ApiError> {
    let key = store_keys::symptom_check(&user.handle, id)?;
    let check: SymptomCheck = json::load(state.store.as_ref(), &key)
        .await
        .map_err(ApiError::missing("Symptom check not found"))?;
    Ok(Json(check))
}
