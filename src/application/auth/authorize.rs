use crate::application::auth::token_utils::hash_token;
use crate::domain::auth::{ACCESS_TOKEN_TYPE, AdminAccount, AuthService, Claims, RevokedTokenRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

/// A request that carried a valid admin token
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub claims: Claims,
}

/// Gate in front of every admin-only operation
pub struct AuthorizeUseCase {
    admin: Arc<AdminAccount>,
    auth_service: Arc<dyn AuthService>,
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
}

impl AuthorizeUseCase {
    pub fn new(
        admin: Arc<AdminAccount>,
        auth_service: Arc<dyn AuthService>,
        revoked_tokens: Arc<dyn RevokedTokenRepository>,
    ) -> Self {
        Self {
            admin,
            auth_service,
            revoked_tokens,
        }
    }

    pub async fn execute(&self, token: &str) -> Result<AdminSession, AppError> {
        let claims = self.auth_service.validate_token(token).map_err(|e| {
            tracing::warn!("Rejected admin token: {}", e);
            AppError::Unauthorized("Invalid or expired token".to_string())
        })?;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(AppError::Unauthorized("Invalid token type".to_string()));
        }

        // Tokens issued to a previously configured account stop working
        let admin_id = claims.admin_id().ok();
        if claims.username != self.admin.username || admin_id != Some(self.admin.id) {
            tracing::warn!("Token for unknown admin {}", claims.username);
            return Err(AppError::Unauthorized("Invalid or expired token".to_string()));
        }

        if self.revoked_tokens.is_revoked(&hash_token(&claims.jti)).await? {
            return Err(AppError::Unauthorized("Token has been revoked".to_string()));
        }

        Ok(AdminSession { claims })
    }
}
