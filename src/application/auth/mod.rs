pub mod admin_login;
pub mod authorize;
pub mod logout;
pub mod token_utils;
