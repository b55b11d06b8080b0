use crate::domain::auth::{
    AdminAccount, AuthService, PasswordHashingService, RevokedTokenRepository,
};
use crate::domain::courses::CourseRepository;
use crate::domain::inquiries::InquiryRepository;
use crate::domain::notices::NoticeRepository;
use crate::domain::reviews::ReviewRepository;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::password::PasswordService;
use crate::infrastructure::repositories::courses::PostgresCourseRepository;
use crate::infrastructure::repositories::inquiries::PostgresInquiryRepository;
use crate::infrastructure::repositories::memory::{
    InMemoryCourseRepository, InMemoryInquiryRepository, InMemoryNoticeRepository,
    InMemoryReviewRepository, InMemoryRevokedTokenRepository,
};
use crate::infrastructure::repositories::notices::PostgresNoticeRepository;
use crate::infrastructure::repositories::reviews::PostgresReviewRepository;
use crate::infrastructure::repositories::revoked_tokens::PostgresRevokedTokenRepository;
use std::sync::Arc;

/// Handles to the four resource collections plus token revocations
#[derive(Clone)]
pub struct Repositories {
    pub inquiries: Arc<dyn InquiryRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub notices: Arc<dyn NoticeRepository>,
    pub revoked_tokens: Arc<dyn RevokedTokenRepository>,
}

impl Repositories {
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            inquiries: Arc::new(PostgresInquiryRepository::new(pool.clone())),
            courses: Arc::new(PostgresCourseRepository::new(pool.clone())),
            reviews: Arc::new(PostgresReviewRepository::new(pool.clone())),
            notices: Arc::new(PostgresNoticeRepository::new(pool.clone())),
            revoked_tokens: Arc::new(PostgresRevokedTokenRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            inquiries: Arc::new(InMemoryInquiryRepository::default()),
            courses: Arc::new(InMemoryCourseRepository::default()),
            reviews: Arc::new(InMemoryReviewRepository::default()),
            notices: Arc::new(InMemoryNoticeRepository::default()),
            revoked_tokens: Arc::new(InMemoryRevokedTokenRepository::default()),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
    pub auth_service: Arc<dyn AuthService>,
    pub password_service: Arc<dyn PasswordHashingService>,
    pub admin: Arc<AdminAccount>,
    /// Present when backed by Postgres; used by the health check.
    pub pool: Option<DbPool>,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        auth_service: Arc<dyn AuthService>,
        admin: AdminAccount,
        pool: Option<DbPool>,
    ) -> Self {
        Self {
            repositories,
            auth_service,
            password_service: Arc::new(PasswordService::new()),
            admin: Arc::new(admin),
            pool,
        }
    }

    pub fn postgres(pool: DbPool, auth_service: Arc<dyn AuthService>, admin: AdminAccount) -> Self {
        Self::new(
            Repositories::postgres(pool.clone()),
            auth_service,
            admin,
            Some(pool),
        )
    }

    pub fn in_memory(auth_service: Arc<dyn AuthService>, admin: AdminAccount) -> Self {
        Self::new(Repositories::in_memory(), auth_service, admin, None)
    }
}
