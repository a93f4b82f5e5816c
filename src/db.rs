pub mod asset_repo;
pub use asset_repo::AssetRepository;
pub mod attendance_repo;
pub use attendance_repo::AttendanceRepository;
pub mod content_repo;
pub use content_repo::ContentRepository;
pub mod payroll_repo;
pub use payroll_repo::PayrollRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
pub mod request_repo;
pub use request_repo::RequestRepository;
pub mod stadium_repo;
pub use stadium_repo::StadiumRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
