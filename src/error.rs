use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::ErrorBody;

/// ApiError
///
/// Rejections returned by the HTTP handlers. Each variant carries a stable code and
/// maps to one status; the response body is always an `ErrorBody`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// `/api/navigation` was asked about a name or path the route table does not declare.
    #[error("no route is declared for `{target}`")]
    RouteNotFound { target: String },
    /// A page path reached the fallback without matching any declared route.
    #[error("no page is declared at `{path}`")]
    PageNotFound { path: String },
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            ApiError::PageNotFound { .. } => "PAGE_NOT_FOUND",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RouteNotFound { .. } | ApiError::PageNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        let context = match self {
            ApiError::RouteNotFound { target } => ("target", target),
            ApiError::PageNotFound { path } => ("path", path),
        };
        ErrorBody {
            message: self.to_string(),
            code: self.code().to_string(),
            context: BTreeMap::from([(context.0.to_string(), context.1.clone())]),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(code = self.code(), status = status.as_u16(), "request rejected");
        (status, Json(self.body())).into_response()
    }
}
