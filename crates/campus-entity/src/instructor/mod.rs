//! Instructor domain entities.

pub mod assignment;
pub mod model;
pub mod office;

pub use assignment::{CourseAssignment, CourseAssignmentInput};
pub use model::{Instructor, InstructorDetail, InstructorInput};
pub use office::OfficeAssignment;
