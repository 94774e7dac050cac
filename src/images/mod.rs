use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const NO_IMAGE_URL: &str = "https://via.placeholder.com/800x600.png?text=No+Image";
pub const IMAGE_ERROR_URL: &str = "https://via.placeholder.com/800x600.png?text=Image+Error";

// Ask for more candidates than we keep.
const SEARCH_POOL: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAsset {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone)]
pub struct ImageSet {
    pub assets: Vec<ImageAsset>,
    pub warning: Option<String>,
}

impl ImageSet {
    /// The first asset is rendered as the hero.
    pub fn hero(&self) -> Option<&ImageAsset> {
        self.assets.first()
    }

    fn placeholders(url: &str, keyword: &str, count: usize, warning: String) -> Self {
        let asset = ImageAsset {
            url: url.to_string(),
            caption: keyword.to_string(),
        };
        Self {
            assets: vec![asset; count],
            warning: Some(warning),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    urls: PhotoUrls,
    alt_description: Option<String>,
}

#[derive(Deserialize)]
struct PhotoUrls {
    regular: String,
}

/// Landscape image search for the keyword, truncated to `count`. Degrades to
/// `count` identical placeholders when the provider fails or comes back
/// empty; the caller never sees an error.
pub async fn fetch(cfg: &Config, client: &Client, keyword: &str, count: usize) -> ImageSet {
    match search(cfg, client, keyword).await {
        Ok(results) if !results.is_empty() => {
            let assets = results
                .into_iter()
                .take(count)
                .map(|p| ImageAsset {
                    url: p.urls.regular,
                    caption: p
                        .alt_description
                        .filter(|alt| !alt.is_empty())
                        .unwrap_or_else(|| keyword.to_string()),
                })
                .collect();
            ImageSet {
                assets,
                warning: None,
            }
        }
        Ok(_) => ImageSet::placeholders(
            NO_IMAGE_URL,
            keyword,
            count,
            format!("image search returned no results for '{keyword}'"),
        ),
        Err(e) => ImageSet::placeholders(
            IMAGE_ERROR_URL,
            keyword,
            count,
            format!("image search failed: {e:#}"),
        ),
    }
}

async fn search(cfg: &Config, client: &Client, keyword: &str) -> Result<Vec<Photo>> {
    let key = cfg
        .image_access_key
        .as_deref()
        .ok_or_else(|| anyhow!("no image access key configured"))?;
    let pool = SEARCH_POOL.to_string();
    let resp = client
        .get(&cfg.image_search_url)
        .header("Authorization", format!("Client-ID {key}"))
        .query(&[
            ("query", keyword),
            ("per_page", pool.as_str()),
            ("orientation", "landscape"),
        ])
        .send()
        .await?
        .error_for_status()?;
    let data: SearchResponse = resp.json().await?;
    Ok(data.results)
}
