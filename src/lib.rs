//! Emoji MCP - iOS emoji image catalog server
//!
//! Exposes a read-only catalog of named emoji image assets over the MCP
//! stdio transport with three tools:
//!
//! - `get_emojis` - list every name in the catalog
//! - `search_emojis` - fuzzy-search names (exact > prefix > substring >
//!   subsequence)
//! - `get_url` - resolve a name and size ("160" or "320") to an image URL
//!
//! The catalog is a JSON file loaded once at startup and never mutated.

pub mod config;
pub mod dataset;
pub mod handlers;
pub mod params;
pub mod search;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::EmojiMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
