//! Course management.

pub mod service;

pub use service::CourseService;
