pub mod auth;
pub mod courses;
pub mod health;
pub mod inquiries;
pub mod notices;
pub mod reviews;
