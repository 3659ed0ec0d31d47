//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use praxis_core::error::CoreError;
use praxis_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Role name professors carry in their access token.
pub const ROLE_PROFESSOR: &str = "professor";

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// The API never authenticates users itself; it only authorizes against the
/// `user_id`/`role` facts carried by the token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (e.g. `"professor"`, `"requester"`).
    pub role: String,
}

impl AuthUser {
    /// Require the professor role for reviewer-only operations.
    pub fn ensure_professor(&self) -> Result<(), AppError> {
        if self.role == ROLE_PROFESSOR {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(
                "this operation requires the professor role".into(),
            )))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
