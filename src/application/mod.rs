//! Application layer controllers implementing the client workflows.
//!
//! This layer owns all client state. Controllers consume port traits from
//! [`crate::domain::ports`] and publish read-only snapshots for the front end.
//!
//! # Available Controllers
//!
//! - [`services::pagination::PaginationController`] - Page cursor and change notification
//! - [`services::list_sync::ListSyncController`] - Fetch/create state machine
//! - [`services::clipboard_workflow::ClipboardWorkflowController`] - Copy, reveal, redirect

pub mod services;
