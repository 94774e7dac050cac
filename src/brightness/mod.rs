use std::time::Duration;

use anyhow::Result;
use image::imageops::{self, FilterType};
use reqwest::Client;

use crate::errors::SiteError;

/// Perceptual luminance cutoff for hex colors (0..=255 scale).
pub const COLOR_DARK_BELOW: f64 = 150.0;
/// Average grey cutoff for images. Tuned separately from the color cutoff;
/// the two scales are not interchangeable.
pub const IMAGE_DARK_BELOW: f64 = 130.0;

// Fixed downsample grid; the average is sensitive to this resolution.
const SAMPLE_GRID: u32 = 50;
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub fn color_is_dark(hex: &str) -> Result<bool, SiteError> {
    let (r, g, b) = parse_hex(hex)?;
    let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    Ok(luminance < COLOR_DARK_BELOW)
}

fn parse_hex(hex: &str) -> Result<(u8, u8, u8), SiteError> {
    let raw = hex.trim().trim_start_matches('#');
    if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SiteError::Color(hex.to_string()));
    }
    let byte = |i: usize| {
        u8::from_str_radix(&raw[i..i + 2], 16).map_err(|_| SiteError::Color(hex.to_string()))
    };
    Ok((byte(0)?, byte(2)?, byte(4)?))
}

/// Fetch the image, greyscale it, downsample to the fixed grid and average.
/// Any fetch or decode failure counts as not-dark.
pub async fn image_is_dark(client: &Client, url: &str) -> bool {
    match average_grey(client, url).await {
        Ok(avg) => avg < IMAGE_DARK_BELOW,
        Err(_) => false,
    }
}

async fn average_grey(client: &Client, url: &str) -> Result<f64> {
    let bytes = client
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let grey = image::load_from_memory(&bytes)?.to_luma8();
    let sample = imageops::resize(&grey, SAMPLE_GRID, SAMPLE_GRID, FilterType::Triangle);
    let total: u64 = sample.pixels().map(|p| u64::from(p.0[0])).sum();
    Ok(total as f64 / f64::from(SAMPLE_GRID * SAMPLE_GRID))
}
