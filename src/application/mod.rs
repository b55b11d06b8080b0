pub mod auth;
pub mod courses;
pub mod inquiries;
pub mod notices;
pub mod reviews;

use crate::shared::error::AppError;
use uuid::Uuid;

/// Ids are opaque to callers; anything that is not one of ours simply does not exist.
pub fn parse_id(id: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}
