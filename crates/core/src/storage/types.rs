use serde::{Deserialize, Serialize};

/// Default number of rows returned by a list query.
pub const DEFAULT_LIMIT: u32 = 100;

/// Offset/limit pagination for list queries.
///
/// Deserializes from `?skip=<int>&limit=<int>`; missing keys fall back to
/// `skip=0` and `limit=100`. Negative values fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Creates a pagination window.
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// Offset as a signed SQL parameter.
    pub fn offset_param(&self) -> i64 {
        i64::from(self.skip)
    }

    /// Limit as a signed SQL parameter.
    pub fn limit_param(&self) -> i64 {
        i64::from(self.limit)
    }
}
