use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use contacts_core::contact::ValidationError;
use contacts_core::storage::{
    repository_error_detail, repository_error_to_status_code, RepositoryError,
};

/// Application error type that wraps `anyhow::Error`.
///
/// The response status and `{"detail": ...}` body are picked by downcasting
/// to the core error types. Anything else is an internal error whose message
/// is logged but never sent to the client.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(validation) = self.0.downcast_ref::<ValidationError>() {
            tracing::debug!(error = %validation, "Request failed validation");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": validation.fields() })),
            )
                .into_response();
        }

        let (status, detail) = match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    repository_error_detail(repo_error),
                )
            }
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Application error");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let error = AppError::from(ValidationError::field("email", "must not be null"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["detail"][0]["field"], "email");
        assert_eq!(json["detail"][0]["message"], "must not be null");
    }

    #[tokio::test]
    async fn test_not_found_detail() {
        let response = AppError::from(RepositoryError::contact_not_found(7)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["detail"], "Contact not found");
    }

    #[tokio::test]
    async fn test_email_taken_detail() {
        let error = RepositoryError::EmailTaken {
            email: "a@b.io".to_string(),
        };

        let response = AppError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Email already registered");
    }

    #[tokio::test]
    async fn test_storage_failure_hides_details() {
        let error = RepositoryError::QueryFailed("disk I/O error at /var/lib/db".to_string());

        let response = AppError::from(error).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Internal server error");
    }

    #[tokio::test]
    async fn test_unknown_error_is_internal() {
        let response = AppError(anyhow::anyhow!("boom")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Internal server error");
    }
}
