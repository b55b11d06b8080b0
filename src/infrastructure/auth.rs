use crate::domain::auth::{AdminAccount, AuthService, Claims, PasswordHashingService};
use crate::infrastructure::config::{AdminConfig, AdminPassword, JwtConfig, JwtKeys};
use anyhow::Result;
use argon2::password_hash::PasswordHash;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::fs;
use uuid::Uuid;

/// Issues and validates admin session tokens (HS256 with a shared secret, or ES256 with PEM keys)
pub struct JwtAuthService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtAuthService {
    pub fn from_config(config: &JwtConfig) -> Result<Self> {
        match &config.keys {
            JwtKeys::Secret(secret) => Ok(Self::new_from_secret(
                secret.as_bytes(),
                config.access_token_expiry,
            )),
            JwtKeys::KeyFiles {
                private_key_path,
                public_key_path,
            } => Self::new(private_key_path, public_key_path, config.access_token_expiry),
            JwtKeys::Ephemeral => {
                tracing::warn!(
                    "No JWT_SECRET or key files configured; using a per-process secret. \
                     Admin sessions will not survive a restart."
                );
                let secret = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
                Ok(Self::new_from_secret(
                    secret.as_bytes(),
                    config.access_token_expiry,
                ))
            }
        }
    }

    /// Create a new JWT service by loading ES256 keys from files
    pub fn new(
        private_key_path: &str,
        public_key_path: &str,
        access_token_expiry: i64,
    ) -> Result<Self> {
        let private_key_pem = fs::read(private_key_path)
            .map_err(|e| anyhow::anyhow!("Failed to read private key file: {}", e))?;

        let public_key_pem = fs::read(public_key_path)
            .map_err(|e| anyhow::anyhow!("Failed to read public key file: {}", e))?;

        Self::new_from_keys(&private_key_pem, &public_key_pem, access_token_expiry)
    }

    /// Create a new JWT service from ES256 key content
    pub fn new_from_keys(
        private_key_pem: &[u8],
        public_key_pem: &[u8],
        access_token_expiry: i64,
    ) -> Result<Self> {
        let encoding_key = EncodingKey::from_ec_pem(private_key_pem)
            .map_err(|e| anyhow::anyhow!("Failed to parse private key: {}", e))?;

        let decoding_key = DecodingKey::from_ec_pem(public_key_pem)
            .map_err(|e| anyhow::anyhow!("Failed to parse public key: {}", e))?;

        Ok(Self {
            algorithm: Algorithm::ES256,
            encoding_key,
            decoding_key,
            access_token_expiry,
        })
    }

    /// Create a new JWT service signing with an HS256 shared secret
    pub fn new_from_secret(secret: &[u8], access_token_expiry: i64) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_token_expiry,
        }
    }
}

impl AuthService for JwtAuthService {
    fn generate_access_token(&self, admin: &AdminAccount) -> Result<String> {
        let claims = Claims::new_access_token(admin.id, &admin.username, self.access_token_expiry);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Failed to generate access token: {}", e))
    }

    fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }
}

/// Build the admin account from configuration, hashing a plaintext password once.
pub fn load_admin_account(
    config: &AdminConfig,
    password_service: &dyn PasswordHashingService,
) -> Result<AdminAccount> {
    if config.uses_default_password {
        tracing::warn!(
            "ADMIN_PASSWORD/ADMIN_PASSWORD_HASH not set; falling back to the default admin password"
        );
    }

    let password_hash = match &config.password {
        AdminPassword::Hash(hash) => {
            PasswordHash::new(hash)
                .map_err(|e| anyhow::anyhow!("ADMIN_PASSWORD_HASH is not a valid hash: {}", e))?;
            hash.clone()
        }
        AdminPassword::Plain(password) => password_service.hash_password(password)?,
    };

    Ok(AdminAccount::new(config.username.clone(), password_hash))
}
