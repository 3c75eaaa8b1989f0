//! Domain layer containing the client's data model and port interfaces.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`ports`] - Trait definitions for the remote service, clipboard and navigation
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation layers
//! - Ports define contracts implemented by the infrastructure layer
//! - Workflow logic lives in controllers (see [`crate::application::services`])

pub mod entities;
pub mod ports;
