//! Configuration for the emoji dataset location

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Emoji dataset file not found: {0}. Set EMOJI_MCP_DATA_FILE or place emojis.json next to the binary.")]
    DataFileNotFound(String),
}

/// Configuration for the emoji MCP server
#[derive(Clone, Debug)]
pub struct EmojiConfig {
    /// Path to the emoji dataset JSON file
    pub data_file: PathBuf,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            data_file: resolve_data_file(),
        }
    }
}

impl EmojiConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("EMOJI_MCP_DATA_FILE") {
            config.data_file = PathBuf::from(path);
        }

        config
    }

    /// Check that the dataset file exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.data_file.exists() {
            return Err(ConfigError::DataFileNotFound(
                self.data_file.display().to_string(),
            ));
        }
        Ok(())
    }
}

/// Find the dataset file relative to the executable.
/// Looks beside the binary, in data/ next to it, then walks parent
/// directories (for dev builds under target/), then ~/.emoji-mcp/.
fn resolve_data_file() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let beside_exe = exe_dir.join("emojis.json");
            if beside_exe.exists() {
                return beside_exe;
            }

            let in_data = exe_dir.join("data").join("emojis.json");
            if in_data.exists() {
                return in_data;
            }

            let mut search_dir = exe_dir.to_path_buf();
            for _ in 0..5 {
                let candidate = search_dir.join("data").join("emojis.json");
                if candidate.exists() {
                    return candidate;
                }
                if !search_dir.pop() {
                    break;
                }
            }
        }
    }

    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".emoji-mcp").join("emojis.json")
}
