use serde::Deserialize;

use crate::models::ClothingStyle;

/// Engine configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Style profile applied when a request does not name one
    #[serde(default)]
    pub default_style: ClothingStyle,

    /// Upper bound on how many outfit previews one batch request may ask for
    #[serde(default = "default_max_previews")]
    pub max_previews: usize,
}

fn default_max_previews() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: ClothingStyle::default(),
            max_previews: default_max_previews(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
