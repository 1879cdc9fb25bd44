//! # campus-service
//!
//! Business logic service layer for Campus Admin. Each service checks the
//! caller's permissions, validates payloads and then delegates to the
//! repositories.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod analysis;
pub mod context;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod instructor;
pub mod student;

#[cfg(test)]
pub(crate) mod test_support;

pub use account::{AccountProvisioner, AccountService, LoginRequest, LoginResponse, RegisterRequest};
pub use analysis::AnalysisService;
pub use context::RequestContext;
pub use course::CourseService;
pub use department::DepartmentService;
pub use enrollment::EnrollmentService;
pub use instructor::InstructorService;
pub use student::{CreateStudentRequest, StudentService};
