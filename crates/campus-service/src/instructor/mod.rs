//! Instructor management and course assignment.

pub mod service;

pub use service::InstructorService;
