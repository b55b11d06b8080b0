use crate::domain::auth::RevokedTokenRepository;
use crate::infrastructure::db::DbPool;
use anyhow::Result;
use async_trait::async_trait;
use time::OffsetDateTime;

pub struct PostgresRevokedTokenRepository {
    pool: DbPool,
}

impl PostgresRevokedTokenRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevokedTokenRepository for PostgresRevokedTokenRepository {
    async fn revoke(&self, token_hash: &str, expires_at: OffsetDateTime) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (token_hash, expires_at)
            VALUES ($1, $2)
            ON CONFLICT (token_hash) DO NOTHING
            "#,
        )
        .bind(token_hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool> {
        let revoked: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM revoked_tokens
                WHERE token_hash = $1 AND expires_at > NOW()
            )
            "#,
        )
        .bind(token_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(revoked)
    }

    async fn delete_expired(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
