use crate::application::auth::authorize::AdminSession;
use crate::application::auth::token_utils::hash_token;
use crate::domain::auth::RevokedTokenRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

/// Revokes the presented token until it would have expired on its own
pub struct LogoutUseCase {
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
}

impl LogoutUseCase {
    pub fn new(revoked_tokens: Arc<dyn RevokedTokenRepository>) -> Self {
        Self { revoked_tokens }
    }

    #[tracing::instrument(skip(self, session), fields(username = %session.claims.username))]
    pub async fn execute(&self, session: &AdminSession) -> Result<(), AppError> {
        let expires_at = session.claims.expires_at()?;
        self.revoked_tokens
            .revoke(&hash_token(&session.claims.jti), expires_at)
            .await?;

        let purged = self.revoked_tokens.delete_expired().await?;
        tracing::info!(purged, "Admin logged out");
        Ok(())
    }
}
