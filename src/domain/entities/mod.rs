//! Core domain entities of the client.
//!
//! Plain data structures shared by the controllers, adapters and front end.
//!
//! # Entity Types
//!
//! - [`ShortUrlEntry`] - A shortened URL as listed by the service
//! - [`PageQuery`] / [`PageResult`] - Pagination cursor and page payload
//! - [`SelectedCopy`] - Entry active in the clipboard workflow
//! - [`ShortenDraft`] - Entry form state for creating a short URL
//! - [`BaseAddress`] - Validated base address of the service
//!
//! Creation requests use a separate struct, [`NewShortUrl`].

pub mod base_address;
pub mod draft;
pub mod page;
pub mod selection;
pub mod short_url;

pub use base_address::{BaseAddress, BaseAddressError};
pub use draft::{MIN_URL_LENGTH, ShortenDraft};
pub use page::{DEFAULT_LIMIT, FIRST_PAGE, MAX_LIMIT, PageQuery, PageResult};
pub use selection::SelectedCopy;
pub use short_url::{NewShortUrl, ShortUrlEntry};
