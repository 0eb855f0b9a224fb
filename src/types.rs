//! Shared types for the emoji catalog

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image resolution variant for an emoji asset.
///
/// The wire form is the pixel width as a string ("160" or "320"), used both
/// as map keys in the dataset file and as the `size` tool argument, so the
/// advertised input schema is a string enum of exactly these values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SizeLabel {
    #[serde(rename = "160")]
    Px160,
    #[serde(rename = "320")]
    Px320,
}

impl SizeLabel {
    /// Pixel width (and height - assets are square)
    pub fn pixels(&self) -> u32 {
        match self {
            SizeLabel::Px160 => 160,
            SizeLabel::Px320 => 320,
        }
    }

    /// Dimension label like "160x160"
    pub fn dimensions(&self) -> String {
        let px = self.pixels();
        format!("{}x{}", px, px)
    }
}

impl Default for SizeLabel {
    fn default() -> Self {
        SizeLabel::Px160
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels())
    }
}
