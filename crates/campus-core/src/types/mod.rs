//! Core type definitions used across the Campus workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
