pub mod error;
pub mod query;
pub mod validation;
