//! Tool parameter types for the emoji MCP server

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::SizeLabel;

/// Parameters for fuzzy name search
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchEmojisParams {
    /// Search query to match against emoji names
    pub query: String,
    /// Maximum number of results to return (default: 10)
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Parameters for resolving an emoji name to an image URL
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetUrlParams {
    /// Exact emoji name as returned by get_emojis
    pub emoji: String,
    /// Image size variant, "160" or "320" (default: "160")
    #[serde(default)]
    pub size: Option<SizeLabel>,
}
