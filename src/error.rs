use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Payload parse error: {0}")]
    Parse(String),

    #[error("Field '{field}' is unavailable: {reason}")]
    Access { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal,
}

impl DisplayError {
    pub fn missing(field: &'static str) -> Self {
        DisplayError::Access {
            field,
            reason: "field is missing".to_string(),
        }
    }

    pub fn wrong_type(field: &'static str, expected: &str) -> Self {
        DisplayError::Access {
            field,
            reason: format!("expected {}", expected),
        }
    }
}

impl From<serde_json::Error> for DisplayError {
    fn from(err: serde_json::Error) -> Self {
        DisplayError::Parse(err.to_string())
    }
}

impl IntoResponse for DisplayError {
    fn into_response(self) -> Response {
        let status = match &self {
            DisplayError::Parse(_) => StatusCode::BAD_REQUEST,
            DisplayError::Access { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DisplayError::Config(_) | DisplayError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": true,
            "message": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DisplayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_error_names_the_field() {
        let err = DisplayError::missing("annunciator.summary");
        assert_eq!(
            err.to_string(),
            "Field 'annunciator.summary' is unavailable: field is missing"
        );
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let parse = DisplayError::Parse("eof".into()).into_response();
        assert_eq!(parse.status(), StatusCode::BAD_REQUEST);

        let access = DisplayError::wrong_type("mode", "an integer").into_response();
        assert_eq!(access.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let config = DisplayError::Config("bad".into()).into_response();
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
