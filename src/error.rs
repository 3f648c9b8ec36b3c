use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::llm::{FormatError, GatewayError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Configuration(String),
    #[error("AI gateway error")]
    Upstream { status: reqwest::StatusCode },
    #[error("AI gateway unreachable")]
    Transport(#[source] reqwest::Error),
    #[error("No content received from AI")]
    MissingContent,
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("{0}")]
    InvalidRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::MissingApiKey => AppError::Configuration(e.to_string()),
            GatewayError::Upstream { status } => AppError::Upstream { status },
            GatewayError::Transport(inner) => AppError::Transport(inner),
            GatewayError::MissingContent => AppError::MissingContent,
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Upstream { status: upstream } => {
                error!(upstream_status = %upstream, "AI gateway returned an error");
            }
            AppError::Transport(e) => error!(error = %e, "AI gateway unreachable"),
            AppError::Format(FormatError::Shape { expected, reason }) => {
                error!(%expected, %reason, "AI response failed shape validation");
            }
            AppError::Format(e) => error!(error = ?e, "AI response format"),
            AppError::InvalidRequest(msg) => warn!(%msg, "rejected request"),
            other => error!(error = %other, "request failed"),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
