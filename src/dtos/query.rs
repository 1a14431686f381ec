//! Query DTOs - query string parameters

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Page size used when `limit` is omitted.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Upper bound applied to `limit`, larger values are clamped.
pub const MAX_LIST_LIMIT: u32 = 1000;

/// Pagination parameters for `GET /items?skip=&limit=`
#[derive(Serialize, Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Number of items to skip
    #[serde(default)]
    pub skip: Option<u64>,
    /// Maximum number of items to return (capped at 1000)
    #[serde(default)]
    pub limit: Option<u64>,
}

impl ListItemsQuery {
    pub fn offset(&self) -> u64 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .map_or(DEFAULT_LIST_LIMIT, |limit| limit.min(u64::from(MAX_LIST_LIMIT)) as u32)
    }
}
