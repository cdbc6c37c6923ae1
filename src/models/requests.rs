//! Request DTOs for the top news API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Number of stories returned when `num` is absent
pub const DEFAULT_NUM_ITEMS: u32 = 10;

fn default_num_items() -> u32 {
    DEFAULT_NUM_ITEMS
}

/// Query string of `GET /top-news/`
///
/// # Fields
/// - `num`: How many of the top-ranked stories to return (default 10)
#[derive(Debug, Clone, Deserialize)]
pub struct TopNewsQuery {
    /// Requested item count
    #[serde(default = "default_num_items")]
    pub num: u32,
}

impl Default for TopNewsQuery {
    fn default() -> Self {
        Self {
            num: DEFAULT_NUM_ITEMS,
        }
    }
}

impl TopNewsQuery {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.num == 0 {
            return Some("num must be a positive integer".to_string());
        }
        None
    }
}
