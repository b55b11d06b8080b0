pub mod courses;
pub mod inquiries;
pub mod memory;
pub mod notices;
pub mod reviews;
pub mod revoked_tokens;
