//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Shortening service gateway over HTTP
//! - [`clipboard`] - Desktop, terminal and no-op clipboards
//! - [`navigator`] - System browser launcher

pub mod clipboard;
pub mod http;
pub mod navigator;
