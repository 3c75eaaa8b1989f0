//! Entry currently active in the copy/reveal/redirect workflow.

/// The short URL most recently copied by the user.
///
/// Has no server counterpart. Replaced wholesale on each copy, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCopy {
    pub short_code: String,
    pub full_url: String,
}

impl SelectedCopy {
    pub fn new(short_code: impl Into<String>, full_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            full_url: full_url.into(),
        }
    }
}
