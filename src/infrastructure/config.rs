use std::env;
use std::str::FromStr;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Process-wide settings, read once at startup from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// `None` selects the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub admin: AdminConfig,
    pub jwt: JwtConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub enum AdminPassword {
    /// Argon2 PHC string
    Hash(String),
    Plain(String),
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: AdminPassword,
    /// True when neither `ADMIN_PASSWORD_HASH` nor `ADMIN_PASSWORD` was set.
    pub uses_default_password: bool,
}

#[derive(Debug, Clone)]
pub enum JwtKeys {
    /// HS256
    Secret(String),
    /// ES256 PEM files
    KeyFiles {
        private_key_path: String,
        public_key_path: String,
    },
    /// No key configured: a random secret is generated per process.
    Ephemeral,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub keys: JwtKeys,
    pub access_token_expiry: i64,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Comma-separated origins; empty or `*` allows any origin.
    pub cors_allowed_origins: String,
    pub rate_limit_per_minute: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: String::new(),
            rate_limit_per_minute: 60,
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    var(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database = var("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 20),
            min_connections: parse_or("DB_MIN_CONNECTIONS", 5),
            acquire_timeout_secs: parse_or("DB_ACQUIRE_TIMEOUT_SECS", 3),
            idle_timeout_secs: parse_or("DB_IDLE_TIMEOUT_SECS", 600),
        });

        let (password, uses_default_password) =
            match (var("ADMIN_PASSWORD_HASH"), var("ADMIN_PASSWORD")) {
                (Some(hash), _) => (AdminPassword::Hash(hash), false),
                (None, Some(plain)) => (AdminPassword::Plain(plain), false),
                (None, None) => (AdminPassword::Plain(DEFAULT_ADMIN_PASSWORD.to_string()), true),
            };

        let admin = AdminConfig {
            username: var("ADMIN_USERNAME").unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            password,
            uses_default_password,
        };

        let keys = match (
            var("JWT_SECRET"),
            var("JWT_PRIVATE_KEY_PATH"),
            var("JWT_PUBLIC_KEY_PATH"),
        ) {
            (Some(secret), _, _) => JwtKeys::Secret(secret),
            (None, Some(private_key_path), Some(public_key_path)) => JwtKeys::KeyFiles {
                private_key_path,
                public_key_path,
            },
            _ => JwtKeys::Ephemeral,
        };

        let jwt = JwtConfig {
            keys,
            access_token_expiry: parse_or("JWT_ACCESS_TOKEN_EXPIRY", 86_400),
        };

        let http = HttpConfig {
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            rate_limit_per_minute: parse_or("RATE_LIMIT_PER_MINUTE", 60).max(1),
        };

        Self {
            port: parse_or("PORT", 3000),
            database,
            admin,
            jwt,
            http,
        }
    }
}
