#[path = "../common/mod.rs"]
#[macro_use]
pub mod common;

mod auth;
mod health;
mod inquiries;
mod postgres;
mod reviews;
