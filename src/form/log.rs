use reqwest::Url;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use super::{error::ClientError, structs::UiState, Error, FormResult};

/// Emits one structured log line per submission attempt.
pub async fn log_submission(
    uuid: Uuid,
    action: &Url,
    state: UiState,
    form_error: Option<&Error>,
    client_error: Option<ClientError>,
) -> FormResult<()> {
    let timestamp = chrono::Utc::now().to_rfc3339();
    let uuid = uuid.to_string();
    let action = action.to_string();
    let outcome = state.as_ref().to_string();
    let form_error_type = form_error.map(|er| er.as_ref().to_string());
    let form_error_detail = form_error.map(|er| json!(er.to_string()));
    let client_error_type = client_error.map(|ce| ce.to_string());

    let logline = LogLine {
        timestamp,
        uuid,
        action,
        outcome,
        form_error_type,
        form_error_detail,
        client_error_type,
    };

    // TODO: send logline
    debug!("LOGLINE: {}", json!(logline));

    Ok(())
}

#[derive(Serialize)]
struct LogLine {
    timestamp: String,
    uuid: String,

    action: String,
    outcome: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    form_error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form_error_detail: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_error_type: Option<String>,
}
