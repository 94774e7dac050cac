use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use uuid::Uuid;

use crate::content::ContentBlock;
use crate::images::ImageAsset;
use crate::theme::Contrast;

pub const MANIFEST_NAME: &str = "run.json";

/// Everything a run decided, saved next to the artifacts it produced.
#[derive(Debug, Serialize)]
pub struct RunManifest<'a> {
    pub run_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub prompt: &'a str,
    pub keyword: &'a str,
    pub background: &'a str,
    pub background_dark: bool,
    pub hero_dark: bool,
    pub content: &'a ContentBlock,
    pub images: &'a [ImageAsset],
    pub contrast: Contrast,
    pub warnings: &'a [String],
}

pub fn save_manifest(run_dir: &Path, manifest: &RunManifest) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(run_dir)?;
    let path = run_dir.join(MANIFEST_NAME);
    fs::write(&path, to_string_pretty(manifest)?)?;
    Ok(path)
}

pub fn debug_stage(stage: &str, detail: &str) {
    eprintln!("debug[{stage}]: {detail}");
    std::io::stderr().flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentSource;
    use crate::theme;

    #[test]
    fn manifest_round_trips_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let content = ContentBlock {
            text: "About the mountains.".into(),
            source: ContentSource::Static,
            warning: Some("text generation failed: model not available".into()),
        };
        let images = vec![ImageAsset {
            url: "https://img.test/a.jpg".into(),
            caption: "ridge".into(),
        }];
        let warnings = vec!["text generation failed: model not available".to_string()];
        let manifest = RunManifest {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            prompt: "A travel site on the Himalayas",
            keyword: "travel site",
            background: "#0d1b2a",
            background_dark: true,
            hero_dark: false,
            content: &content,
            images: &images,
            contrast: theme::decide(true, false),
            warnings: &warnings,
        };

        let path = save_manifest(dir.path(), &manifest).unwrap();
        let raw = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["keyword"], "travel site");
        assert_eq!(value["background_dark"], true);
        assert_eq!(value["content"]["source"], "static");
        assert_eq!(value["contrast"]["body_text"], "#fff");
        assert_eq!(value["warnings"][0], warnings[0]);
    }
}
