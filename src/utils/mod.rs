//! Utility functions shared across the client.
//!
//! - [`url_validator`] - Client-side URL validation

pub mod url_validator;
