pub mod asset;
pub mod attendance;
pub mod auth;
pub mod course;
pub mod news;
pub mod payroll;
pub mod report;
pub mod request;
pub mod stadium;
pub mod user;
