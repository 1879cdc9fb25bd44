//! Department domain entities.

pub mod model;

pub use model::{Department, DepartmentDetail, DepartmentInput};
