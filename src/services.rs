pub mod asset_service;
pub mod attendance_service;
pub mod auth;
pub mod qr_service;
pub mod storage_service;

pub use asset_service::AssetService;
pub use attendance_service::AttendanceService;
pub use auth::AuthService;
pub use storage_service::FileStorage;
