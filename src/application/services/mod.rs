//! Controllers implementing the client workflows.

pub mod clipboard_workflow;
pub mod list_sync;
pub mod pagination;

pub use clipboard_workflow::{ClipboardSnapshot, ClipboardWorkflowController};
pub use list_sync::{ListSnapshot, ListSyncController, RequestState};
pub use pagination::PaginationController;
