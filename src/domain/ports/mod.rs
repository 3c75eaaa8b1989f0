//! Port trait definitions for the domain layer.
//!
//! The controllers in [`crate::application::services`] depend only on these traits.
//! Concrete adapters live in `crate::infrastructure`.
//!
//! # Available Ports
//!
//! - [`ShortUrlGateway`] - Remote list and create operations
//! - [`ClipboardPort`] - Clipboard writes
//! - [`Navigator`] - External navigation
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod clipboard;
pub mod navigator;
pub mod short_url_gateway;

pub use clipboard::ClipboardPort;
pub use navigator::Navigator;
pub use short_url_gateway::ShortUrlGateway;

#[cfg(test)]
pub use clipboard::MockClipboardPort;
#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use short_url_gateway::MockShortUrlGateway;
