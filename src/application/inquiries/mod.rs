pub mod get;
pub mod list;
pub mod set_status;
pub mod submit;
