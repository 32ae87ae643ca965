use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("not found")]
    NotFound,

    #[error("order cannot be cancelled")]
    InvalidState,

    #[error("{0}")]
    BadRequest(String),

    #[error("missing or invalid credentials")]
    Unauthorized,

    #[error("admin access required")]
    Forbidden,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmptyCart => AppError::EmptyCart,
            DomainError::NotFound => AppError::NotFound,
            DomainError::InvalidState => AppError::InvalidState,
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            // Precondition failures share a 400 contract, NotFound included:
            // the caller learns nothing about resources it does not own.
            AppError::EmptyCart
            | AppError::NotFound
            | AppError::InvalidState
            | AppError::BadRequest(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Unauthorized => HttpResponse::Unauthorized().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Forbidden => HttpResponse::Forbidden().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn precondition_failures_return_400() {
        for err in [
            AppError::EmptyCart,
            AppError::NotFound,
            AppError::InvalidState,
            AppError::BadRequest("bad quantity".to_string()),
        ] {
            assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn unauthorized_returns_401() {
        assert_eq!(
            AppError::Unauthorized.error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn forbidden_returns_403() {
        assert_eq!(
            AppError::Forbidden.error_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn internal_error_returns_500_with_generic_body() {
        let err = AppError::Internal("connection reset".to_string());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn empty_cart_display() {
        assert_eq!(AppError::EmptyCart.to_string(), "cart is empty");
    }

    #[test]
    fn domain_errors_map_onto_http_taxonomy() {
        assert!(matches!(
            AppError::from(DomainError::EmptyCart),
            AppError::EmptyCart
        ));
        assert!(matches!(
            AppError::from(DomainError::NotFound),
            AppError::NotFound
        ));
        assert!(matches!(
            AppError::from(DomainError::InvalidState),
            AppError::InvalidState
        ));
        assert!(matches!(
            AppError::from(DomainError::InvalidInput("q".to_string())),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(DomainError::Internal("io".to_string())),
            AppError::Internal(_)
        ));
    }
}
