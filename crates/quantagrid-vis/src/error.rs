//! Error types for the visualisation server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the visualisation server.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("invalid {key}={value:?}: {reason}")]
    Config {
        key: String,
        value: String,
        reason: String,
    },

    /// Simulation rejected an input
    #[error(transparent)]
    Simulation(#[from] quantagrid_sim::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(key: &str, value: &str, reason: impl std::fmt::Display) -> Self {
        Error::Config {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Error::Config { .. } | Error::Simulation(_) => StatusCode::BAD_REQUEST,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
