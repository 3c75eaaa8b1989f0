//! HTTP adapter for the shortening service.

pub mod dto;
mod gateway;

pub use gateway::{DEFAULT_CREATE_PATH, HttpShortUrlGateway, PAGE_DATA_PATH};
