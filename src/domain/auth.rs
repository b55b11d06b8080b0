use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub const ACCESS_TOKEN_TYPE: &str = "access";

/// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin ID)
    pub sub: String,
    pub username: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Unique token id, used for revocation on logout
    pub jti: String,
    #[serde(rename = "type")]
    pub token_type: String,
}

impl Claims {
    pub fn new_access_token(admin_id: Uuid, username: &str, expiry_seconds: i64) -> Self {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        Self {
            sub: admin_id.to_string(),
            username: username.to_string(),
            iat: now,
            exp: now + expiry_seconds,
            jti: Uuid::new_v4().to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        }
    }

    pub fn admin_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| anyhow::anyhow!("Invalid admin ID in claims: {}", e))
    }

    pub fn expires_at(&self) -> Result<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.exp)
            .map_err(|e| anyhow::anyhow!("Invalid expiry in claims: {}", e))
    }
}

/// The single administrator allowed into the dashboard.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub id: Uuid,
    pub username: String,
    /// Argon2 PHC string, never serialized
    pub password_hash: String,
}

impl AdminAccount {
    /// The id is derived from the username so tokens survive a restart.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, username.as_bytes()),
            username,
            password_hash: password_hash.into(),
        }
    }
}

/// Auth service trait for JWT operations
pub trait AuthService: Send + Sync {
    fn generate_access_token(&self, admin: &AdminAccount) -> Result<String>;

    /// Validate signature and expiry, and decode the claims
    fn validate_token(&self, token: &str) -> Result<Claims>;

    /// Lifetime of issued access tokens in seconds
    fn access_token_expiry(&self) -> i64;
}

/// One-way hashing of the admin credential
pub trait PasswordHashingService: Send + Sync {
    /// Hash into a self-describing PHC string
    fn hash_password(&self, password: &str) -> Result<String>;
    /// `Ok(false)` on mismatch; `Err` only when `hash` is not a usable PHC string
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Tokens invalidated by logout before their natural expiry
#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
    async fn revoke(&self, token_hash: &str, expires_at: OffsetDateTime) -> Result<()>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool>;

    /// Forget revocations whose token has expired anyway
    async fn delete_expired(&self) -> Result<u64>;
}
