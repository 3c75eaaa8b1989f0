//! Short URL entity as listed by the shortening service.

/// A shortened URL and its click counter.
///
/// Instances are produced by the server and only ever read by the client; `clicks` is
/// owned by the server and changes only through a refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlEntry {
    pub id: String,
    pub full_url: String,
    pub short_code: String,
    pub clicks: u64,
}

impl ShortUrlEntry {
    /// Creates a new entry.
    pub fn new(
        id: impl Into<String>,
        full_url: impl Into<String>,
        short_code: impl Into<String>,
        clicks: u64,
    ) -> Self {
        Self {
            id: id.into(),
            full_url: full_url.into(),
            short_code: short_code.into(),
            clicks,
        }
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub full_url: String,
    /// Requested short code length.
    pub url_length: u32,
}

impl NewShortUrl {
    pub fn new(full_url: impl Into<String>, url_length: u32) -> Self {
        Self {
            full_url: full_url.into(),
            url_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = ShortUrlEntry::new("65a1", "https://example.com/long", "abcd", 7);

        assert_eq!(entry.id, "65a1");
        assert_eq!(entry.full_url, "https://example.com/long");
        assert_eq!(entry.short_code, "abcd");
        assert_eq!(entry.clicks, 7);
    }

    #[test]
    fn test_new_short_url() {
        let request = NewShortUrl::new("https://a.com", 6);
        assert_eq!(request.full_url, "https://a.com");
        assert_eq!(request.url_length, 6);
    }
}
