use std::time::Duration;

/// Quiescence window before the highlight is re-evaluated (milliseconds)
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
/// Grace delay between losing focus and closing the dropdown (milliseconds)
pub const DEFAULT_BLUR_GRACE_MS: u64 = 100;
/// Limit on typed query length
pub const DEFAULT_MAX_QUERY_LEN: usize = 256;

/// Timing and input limits for a [`ComboBox`](crate::combobox::ComboBox)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboConfig {
    pub debounce: Duration,
    pub blur_grace: Duration,
    pub max_query_len: usize,
}

impl ComboConfig {
    pub fn from_millis(debounce_ms: u64, blur_grace_ms: u64) -> Self {
        Self {
            debounce: Duration::from_millis(debounce_ms),
            blur_grace: Duration::from_millis(blur_grace_ms),
            ..Self::default()
        }
    }
}

impl Default for ComboConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            blur_grace: Duration::from_millis(DEFAULT_BLUR_GRACE_MS),
            max_query_len: DEFAULT_MAX_QUERY_LEN,
        }
    }
}
