//! Response types (Serialize)

use api_explorer_core::Stats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchScheduledResponse {
    pub scheduled: bool,
    pub delay_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub id: String,
    pub bookmarked: bool,
    pub persisted: bool,
    pub stats: Stats,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
