pub mod staff;
pub mod vacation;

pub use staff::PostgresStaffRepository;
pub use vacation::PostgresVacationRepository;
