pub mod assets;
pub mod attendance;
pub mod auth;
pub mod courses;
pub mod health;
pub mod news;
pub mod payroll;
pub mod qr;
pub mod reports;
pub mod requests;
pub mod stadiums;
pub mod upload;
pub mod users;
