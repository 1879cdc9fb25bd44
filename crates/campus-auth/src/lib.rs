//! # campus-auth
//!
//! Authentication and authorization for Campus Admin.
//!
//! ## Modules
//!
//! - `jwt`: signed access token issuance and verification
//! - `password`: Argon2id password hashing and policy enforcement
//! - `rbac`: role-based access control enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Permission, RbacEnforcer, RbacPolicies};
