//! Student records.

pub mod service;

pub use service::{CreateStudentRequest, StudentService};
