//! Calculate Handlers
//!
//! 传输层只负责取出请求体文本并转发求值结果，不做任何校验

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::application::{EvaluateCommand, ResponseEnvelope};
use crate::infrastructure::http::dto::GatewayEvent;
use crate::infrastructure::http::response::EnvelopeResponse;
use crate::infrastructure::http::state::AppState;

/// 请求体转文本：空或非 UTF-8 视为缺失
fn body_text(body: &Bytes) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    std::str::from_utf8(body).ok().map(str::to_string)
}

// ============================================================================
// Calculate
// ============================================================================

pub async fn calculate(State(state): State<Arc<AppState>>, body: Bytes) -> EnvelopeResponse {
    let cmd = EvaluateCommand::new(body_text(&body));
    state.evaluate_handler.handle(cmd).into()
}

// ============================================================================
// Invoke (gateway event)
// ============================================================================

pub async fn invoke(State(state): State<Arc<AppState>>, body: Bytes) -> Json<ResponseEnvelope> {
    let event: GatewayEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed gateway event, treating body as absent");
            GatewayEvent::default()
        }
    };

    let cmd = EvaluateCommand::new(event.body);
    Json(state.evaluate_handler.handle(cmd))
}
