// errors.rs
use crate::api::ApiError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, input validation, missing resources) or the backend API.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    /// Client-side validation, e.g. a blank search or question.
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Backend Error: {0}")]
    Upstream(#[from] ApiError),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
