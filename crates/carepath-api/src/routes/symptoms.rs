use axum::Json;
use serde::{Deserialize, Serialize};

use carepath_core::models::common_symptom::CommonSymptom;
use carepath_core::models::conversation::ConversationTurn;
use carepath_core::models::triage::TriageResult;
use carepath_triage::{catalog, classify, step, SymptomAccumulator};

use crate::error::ApiError;
use crate::extract::ApiJson;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
    /// Symptoms identified earlier in this session, as returned by the
    /// previous response.
    #[serde(default)]
    pub identified_symptoms: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    /// Everything identified so far in the session, not just this message.
    pub identified_symptoms: Vec<String>,
    pub suggestions: Vec<String>,
    pub assessment_complete: bool,
    pub triage_data: Option<TriageResult>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Advance a chat session by one message.
pub async fn process_message(ApiJson(req): ApiJson<ChatRequest>) -> Result<Json<ChatResponse>, ApiError> {
    let (Some(message), Some(session_id)) = (
        present(req.message.as_deref()),
        present(req.session_id.as_deref()),
    ) else {
        return Err(ApiError::BadRequest(
            "Message and sessionId are required".to_string(),
        ));
    };

    let outcome = step(message, &req.conversation_history);

    let mut accumulated: SymptomAccumulator = req.identified_symptoms.iter().cloned().collect();
    accumulated.extend(outcome.identified_symptoms);

    let triage_data = outcome
        .assessment_complete
        .then(|| classify(accumulated.as_slice()));

    tracing::info!(
        session_id,
        turns = req.conversation_history.len(),
        symptoms = accumulated.len(),
        complete = outcome.assessment_complete,
        "chat_step"
    );

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        identified_symptoms: accumulated.into_vec(),
        suggestions: outcome.suggestions,
        assessment_complete: outcome.assessment_complete,
        triage_data,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub session_id: Option<String>,
}

/// Classify a finished symptom list.
pub async fn check_symptoms(ApiJson(req): ApiJson<CheckRequest>) -> Result<Json<TriageResult>, ApiError> {
    if req.symptoms.is_empty() {
        return Err(ApiError::BadRequest("Symptoms array is required".to_string()));
    }

    let result = classify(&req.symptoms);
    tracing::info!(
        session_id = req.session_id.as_deref().unwrap_or_default(),
        severity = %result.severity,
        "symptom_check"
    );
    Ok(Json(result))
}

pub async fn common_symptoms() -> Json<&'static [CommonSymptom]> {
    Json(catalog::common_symptoms())
}
