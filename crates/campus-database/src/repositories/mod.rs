//! Repository implementations for all Campus Admin entities.

pub mod analysis;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod instructor;
pub mod user;

pub use analysis::AnalysisRepository;
pub use course::CourseRepository;
pub use department::DepartmentRepository;
pub use enrollment::EnrollmentRepository;
pub use instructor::InstructorRepository;
pub use user::UserRepository;
