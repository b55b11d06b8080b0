use crate::domain::auth::PasswordHashingService;
use anyhow::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Argon2id with the crate's recommended parameters
#[derive(Clone, Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHashingService for PasswordService {
    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {}", e))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let stored = PasswordHash::new(hash)
            .map_err(|e| anyhow::anyhow!("Stored admin hash is malformed: {}", e))?;

        // Parameters come from the PHC string, so hashes made elsewhere still verify
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &stored)
            .is_ok())
    }
}
