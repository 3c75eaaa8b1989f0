//! # URL Shrinker
//!
//! Client core for a URL shortening service: a paginated list of short URLs, a form
//! that creates new ones and a clipboard workflow for sharing them.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the port traits the controllers talk to
//! - **Application Layer** ([`application`]) - Pagination, list sync and clipboard controllers
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP gateway, clipboard backends, browser
//! - **Console** ([`console`]) - Terminal front end
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:5000/"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use error::{ClientError, ValidationError};
pub use state::AppState;

/// Commonly used types.
pub mod prelude {
    pub use crate::application::services::{
        ClipboardSnapshot, ClipboardWorkflowController, ListSnapshot, ListSyncController,
        PaginationController, RequestState,
    };
    pub use crate::domain::entities::{
        BaseAddress, NewShortUrl, PageQuery, PageResult, SelectedCopy, ShortUrlEntry,
        ShortenDraft,
    };
    pub use crate::domain::ports::{ClipboardPort, Navigator, ShortUrlGateway};
    pub use crate::error::{ClientError, ValidationError};
}
