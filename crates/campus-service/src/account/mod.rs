//! Account registration, login and the current-user profile.

pub mod provisioner;
pub mod service;

pub use provisioner::AccountProvisioner;
pub use service::{AccountService, LoginRequest, LoginResponse, RegisterRequest};
