use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reference_base_url: String,
    pub image_search_url: String,
    /// Image-search API credential. Resolved from the config file or the
    /// UNSPLASH_ACCESS_KEY environment variable, never hardcoded.
    pub image_access_key: Option<String>,
    pub image_count: usize,
    pub output_root: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_base_url: "https://en.wikipedia.org/wiki".into(),
            image_search_url: "https://api.unsplash.com/search/photos".into(),
            image_access_key: None,
            image_count: 6,
            output_root: "generated_sites".into(),
            model: "mistral".into(),
            timeout_secs: 180,
        }
    }
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => {
                let raw = fs::read_to_string(p)
                    .with_context(|| format!("failed to read config file {p}"))?;
                toml::from_str(&raw).with_context(|| format!("failed to parse config file {p}"))?
            }
            None => Config::default(),
        };
        if cfg.image_access_key.is_none() {
            cfg.image_access_key = std::env::var("UNSPLASH_ACCESS_KEY").ok();
        }
        Ok(cfg)
    }
}
