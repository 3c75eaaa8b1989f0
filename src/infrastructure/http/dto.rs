//! Wire formats of the shortening service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{PageResult, ShortUrlEntry};

/// Body of `GET getpagedata`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDataResponse {
    #[serde(default)]
    pub short_urls: Vec<ShortUrlRecord>,
}

/// One short URL as stored by the service.
#[derive(Debug, Deserialize)]
pub struct ShortUrlRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub full: String,
    pub short: String,
    #[serde(default)]
    pub clicks: u64,
}

impl From<ShortUrlRecord> for ShortUrlEntry {
    fn from(record: ShortUrlRecord) -> Self {
        ShortUrlEntry::new(record.id, record.full, record.short, record.clicks)
    }
}

impl From<PageDataResponse> for PageResult {
    fn from(response: PageDataResponse) -> Self {
        PageResult::new(response.short_urls.into_iter().map(Into::into).collect())
    }
}

/// Url-encoded body of the create request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlForm<'a> {
    pub full_url: &'a str,
    pub url_length: u32,
}
