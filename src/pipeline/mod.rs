use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Utc};
use reqwest::Client;
use uuid::Uuid;

use crate::assemble::{self, PageSpec};
use crate::brightness;
use crate::bundle::{self, Bundle};
use crate::cli::LibraryKind;
use crate::config::Config;
use crate::content::{self, ContentBlock};
use crate::generator::Generator;
use crate::images::{self, ImageSet};
use crate::keyword;
use crate::log::{self, RunManifest};
use crate::theme::{self, Contrast};

#[derive(Debug, Clone)]
pub struct Request {
    pub prompt: String,
    pub background: String,
    pub library: LibraryKind,
}

pub struct Outcome {
    pub run_id: Uuid,
    pub keyword: String,
    pub title: String,
    pub content: ContentBlock,
    pub images: ImageSet,
    pub background_dark: bool,
    pub hero_dark: bool,
    pub contrast: Contrast,
    pub warnings: Vec<String>,
    pub bundle: Bundle,
    pub run_dir: PathBuf,
}

/// The single caller-facing operation. Keyword first, then content and image
/// resolution concurrently (no data dependency), then the two brightness
/// verdicts, theme, assembly, bundle write, manifest.
///
/// Fails only on an invalid background color or an artifact-write failure;
/// every provider problem degrades to a fallback and lands in `warnings`.
pub async fn generate(
    cfg: &Config,
    generator: &dyn Generator,
    req: &Request,
    debug: bool,
) -> Result<Outcome> {
    let background_dark = brightness::color_is_dark(&req.background)?;

    let client = Client::new();
    let kw = keyword::extract(&req.prompt);
    let title = keyword::title_case(&kw);
    if debug {
        log::debug_stage("keyword", &format!("'{}' -> '{kw}'", req.prompt));
    }

    let (content, images) = tokio::join!(
        content::resolve(cfg, &client, generator, &kw),
        images::fetch(cfg, &client, &kw, cfg.image_count),
    );
    if debug {
        log::debug_stage("content", &format!("{:?}, {} words", content.source, content.text.split_whitespace().count()));
        log::debug_stage("images", &format!("{} assets", images.assets.len()));
    }

    let hero_dark = match images.hero() {
        Some(hero) => brightness::image_is_dark(&client, &hero.url).await,
        None => false,
    };
    let contrast = theme::decide(background_dark, hero_dark);
    if debug {
        log::debug_stage(
            "theme",
            &format!("background_dark={background_dark} hero_dark={hero_dark}"),
        );
    }

    let spec = PageSpec {
        title: &title,
        description: &content.text,
        background: &req.background,
        contrast,
        assets: &images.assets,
        library: req.library,
        year: Utc::now().year(),
    };
    let markup = assemble::render_page(&spec);
    let snippet = assemble::render_component(&spec);

    // Isolated per-run directory: concurrent invocations cannot interleave
    // writes to each other's artifacts.
    let run_id = Uuid::new_v4();
    let run_dir = PathBuf::from(&cfg.output_root).join(run_id.to_string());
    let bundle = bundle::write(&run_dir, &markup, &snippet)?;

    let warnings: Vec<String> = content
        .warning
        .iter()
        .chain(images.warning.iter())
        .cloned()
        .collect();
    let manifest = RunManifest {
        run_id,
        timestamp: Utc::now(),
        prompt: &req.prompt,
        keyword: &kw,
        background: &req.background,
        background_dark,
        hero_dark,
        content: &content,
        images: &images.assets,
        contrast,
        warnings: &warnings,
    };
    log::save_manifest(&run_dir, &manifest)?;

    Ok(Outcome {
        run_id,
        keyword: kw,
        title,
        content,
        images,
        background_dark,
        hero_dark,
        contrast,
        warnings,
        bundle,
        run_dir,
    })
}
