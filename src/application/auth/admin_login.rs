use crate::domain::auth::{AdminAccount, AuthService, PasswordHashingService};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Missing fields deserialize as empty strings and fail like any other wrong credential
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    #[serde(default)]
    #[schema(example = "admin")]
    pub username: String,

    #[serde(default)]
    #[schema(example = "admin123")]
    pub password: String,
}

/// Session token plus the account details the dashboard keeps alongside it
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub id: Uuid,
    pub username: String,
    pub token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

pub struct AdminLoginUseCase {
    admin: Arc<AdminAccount>,
    auth_service: Arc<dyn AuthService>,
    password_service: Arc<dyn PasswordHashingService>,
}

impl AdminLoginUseCase {
    pub fn new(
        admin: Arc<AdminAccount>,
        auth_service: Arc<dyn AuthService>,
        password_service: Arc<dyn PasswordHashingService>,
    ) -> Self {
        Self {
            admin,
            auth_service,
            password_service,
        }
    }

    #[tracing::instrument(skip(self, req), fields(username = %req.username))]
    pub async fn execute(&self, req: AdminLoginRequest) -> Result<AdminLoginResponse, AppError> {
        // Verify the password even for an unknown username so both failures cost the same
        let valid_password = self
            .password_service
            .verify_password(&req.password, &self.admin.password_hash)
            .map_err(|e| {
                tracing::error!("Password verification internal error: {}", e);
                AppError::InternalServerError(e)
            })?;

        if req.username != self.admin.username || !valid_password {
            tracing::warn!("Rejected admin login for username: {}", req.username);
            return Err(AppError::InvalidCredentials);
        }

        let token = self
            .auth_service
            .generate_access_token(&self.admin)
            .map_err(AppError::InternalServerError)?;

        tracing::info!("Admin {} logged in", self.admin.username);

        Ok(AdminLoginResponse {
            id: self.admin.id,
            username: self.admin.username.clone(),
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.auth_service.access_token_expiry(),
        })
    }
}
