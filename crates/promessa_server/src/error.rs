//! Maps workspace errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use promessa_error::{
    AuthErrorKind, DatabaseErrorKind, PlannerErrorKind, PromessaError, PromessaErrorKind,
    SeatingErrorKind, ServerErrorKind,
};
use serde_json::json;

/// An API failure carrying the underlying workspace error.
///
/// Status mapping: validation failures are 422, conflicts with current state
/// (full table, referenced timeline) are 409, missing entities are 404,
/// identity failures are 401 and everything else is a 500. The body is always
/// `{ "error": "..." }`.
#[derive(Debug)]
pub struct ApiError(PromessaError);

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<PromessaError> for ApiError {
    fn from(err: PromessaError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// The status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            PromessaErrorKind::Seating(e) => match &e.kind {
                SeatingErrorKind::TableNotFound(_) | SeatingErrorKind::PersonNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                SeatingErrorKind::TableFull { .. }
                | SeatingErrorKind::GroupTooLarge { .. }
                | SeatingErrorKind::CapacityBelowOccupancy { .. }
                | SeatingErrorKind::SpecialTableProtected(_) => StatusCode::CONFLICT,
                SeatingErrorKind::EmptyName | SeatingErrorKind::InvalidCapacity(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            PromessaErrorKind::Planner(e) => match &e.kind {
                PlannerErrorKind::GuestNotFound(_)
                | PlannerErrorKind::MemberNotFound(_)
                | PlannerErrorKind::TaskNotFound(_)
                | PlannerErrorKind::TimelineNotFound(_)
                | PlannerErrorKind::BudgetItemNotFound(_)
                | PlannerErrorKind::VendorNotFound(_) => StatusCode::NOT_FOUND,
                PlannerErrorKind::TimelineInUse { .. }
                | PlannerErrorKind::DuplicateTimeline(_) => StatusCode::CONFLICT,
                PlannerErrorKind::EmptyName(_) | PlannerErrorKind::NegativeCost(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            PromessaErrorKind::Auth(e) => match &e.kind {
                AuthErrorKind::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
                AuthErrorKind::Provider(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::UNAUTHORIZED,
            },
            PromessaErrorKind::Database(e) => match &e.kind {
                DatabaseErrorKind::NotFound => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            PromessaErrorKind::Server(e) => match &e.kind {
                ServerErrorKind::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            PromessaErrorKind::Config(_) | PromessaErrorKind::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status {
            StatusCode::NOT_FOUND => tracing::debug!(error = %self.0, "Request target not found"),
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::BAD_GATEWAY => {
                tracing::error!(error = %self.0, "Request failed")
            }
            _ => tracing::debug!(error = %self.0, status = %status, "Request rejected"),
        }
        let message = match self.0.kind() {
            // Internal failures keep their detail in the logs.
            PromessaErrorKind::Database(_)
            | PromessaErrorKind::Storage(_)
            | PromessaErrorKind::Config(_) => "internal error".to_string(),
            kind => kind.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promessa_error::{PlannerError, SeatingError};
    use uuid::Uuid;

    fn status_of(kind: impl Into<PromessaErrorKind>) -> StatusCode {
        ApiError(PromessaError::new(kind.into())).status()
    }

    #[test]
    fn capacity_conflicts_map_to_409() {
        assert_eq!(
            status_of(SeatingError::new(SeatingErrorKind::TableFull {
                name: "Tavolo 1".to_string(),
                capacity: 8,
            })),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(PlannerError::new(PlannerErrorKind::TimelineInUse {
                name: "Six months before".to_string(),
                task_count: 2,
            })),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn missing_entities_map_to_404() {
        assert_eq!(
            status_of(SeatingError::new(SeatingErrorKind::PersonNotFound(
                Uuid::new_v4()
            ))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(PlannerError::new(PlannerErrorKind::TaskNotFound(
                Uuid::new_v4()
            ))),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_failures_map_to_422() {
        assert_eq!(
            status_of(SeatingError::new(SeatingErrorKind::InvalidCapacity(0))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(PlannerError::new(PlannerErrorKind::NegativeCost(-3.0))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
