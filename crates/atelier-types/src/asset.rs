use serde::{Deserialize, Serialize};

/// Reference to a stored binary asset.
///
/// Records carry these instead of raw paths: `file_name` locates the asset
/// inside the asset store (and in per-owner manifests), `url` is the relative
/// public path the render layer prefixes with its configured media base.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Stored filename, unique within the asset directory.
    pub file_name: String,
    /// Relative public URL path (e.g. `/media/assets/2024..._cover.jpg`).
    pub url: String,
}

impl AssetRef {
    pub fn new(file_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            url: url.into(),
        }
    }
}
