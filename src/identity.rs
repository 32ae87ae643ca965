//! Narrow interface to the upstream Identity Provider.
//!
//! The auth gateway terminates the token protocol and forwards the resolved
//! claims as headers: `x-user-id` (UUID, required) and `x-user-role`
//! (`admin` or `customer`, defaults to customer). This service never sees
//! credentials; it only trusts the gateway's claims.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Admin,
}

#[derive(Debug, Clone, Copy)]
pub struct Principal {
    pub id: Uuid,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }

    fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let id = headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or(AppError::Unauthorized)?;

        let role = match headers.get(USER_ROLE_HEADER).and_then(|v| v.to_str().ok()) {
            Some("admin") => Role::Admin,
            _ => Role::Customer,
        };

        Ok(Principal { id, role })
    }
}

impl FromRequest for Principal {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Principal::from_headers(req.headers()))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn valid_headers_resolve_a_customer_principal() {
        let id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, id.to_string()))
            .to_http_request();

        let principal = Principal::from_headers(req.headers()).expect("should resolve");
        assert_eq!(principal.id, id);
        assert_eq!(principal.role, Role::Customer);
        assert!(principal.require_admin().is_err());
    }

    #[test]
    fn admin_role_claim_grants_admin() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .insert_header((USER_ROLE_HEADER, "admin"))
            .to_http_request();

        let principal = Principal::from_headers(req.headers()).expect("should resolve");
        assert!(principal.is_admin());
        assert!(principal.require_admin().is_ok());
    }

    #[test]
    fn missing_user_id_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = Principal::from_headers(req.headers());
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn malformed_user_id_is_unauthorized() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "not-a-uuid"))
            .to_http_request();
        let result = Principal::from_headers(req.headers());
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn unknown_role_falls_back_to_customer() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, Uuid::new_v4().to_string()))
            .insert_header((USER_ROLE_HEADER, "superuser"))
            .to_http_request();
        let principal = Principal::from_headers(req.headers()).expect("should resolve");
        assert_eq!(principal.role, Role::Customer);
    }
}
