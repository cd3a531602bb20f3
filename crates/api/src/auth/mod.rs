//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token generation and validation.
//!
//! Tokens are issued by the organization's identity setup; this server only
//! verifies them and reads the role claim.

pub mod jwt;
