//! Envelope Response
//!
//! 把响应信封原样映射为 HTTP 响应：状态码 + JSON 文本

use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};

use crate::application::ResponseEnvelope;

#[derive(Debug)]
pub struct EnvelopeResponse(pub ResponseEnvelope);

impl From<ResponseEnvelope> for EnvelopeResponse {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self(envelope)
    }
}

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        let status = match StatusCode::from_u16(self.0.status_code) {
            Ok(status) => status,
            Err(_) => {
                tracing::error!(status_code = self.0.status_code, "Envelope carries invalid status code");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, [(CONTENT_TYPE, "application/json")], self.0.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_content_type_relayed() {
        let envelope = ResponseEnvelope {
            status_code: 400,
            body: r#"{"message":"Invalid operator"}"#.to_string(),
        };
        let response = EnvelopeResponse(envelope).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
