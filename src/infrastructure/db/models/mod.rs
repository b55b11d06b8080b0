pub mod courses;
pub mod inquiries;
pub mod notices;
pub mod reviews;
