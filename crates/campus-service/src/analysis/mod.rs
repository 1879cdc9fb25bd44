//! Dashboard aggregates.

pub mod service;

pub use service::AnalysisService;
