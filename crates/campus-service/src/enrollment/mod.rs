//! Enrollment management.

pub mod service;

pub use service::EnrollmentService;
