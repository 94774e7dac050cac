use crate::cli::LibraryKind;
use crate::images::{ImageAsset, NO_IMAGE_URL};
use crate::keyword::title_case;
use crate::theme::Contrast;

/// ========================================
/// Library-specific header fragments
/// ========================================

const MATERIAL_CSS: &str = r#"
body { font-family: 'Roboto', sans-serif; letter-spacing: 0.5px; }
.btn-primary { background-color: #1976d2; border: none; }
"#;

const ANT_DESIGN_CSS: &str = r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; letter-spacing: 0.3px; }
.btn-primary { background-color: #1890ff; border: none; border-radius: 4px; }
"#;

const MATERIAL_IMPORT: &str = "import { Button, Container, Typography } from '@mui/material';";
const ANT_DESIGN_IMPORT: &str = "import { Button, Layout, Typography } from 'antd';";

pub struct Preamble {
    pub style: &'static str,
    pub import_line: &'static str,
}

impl LibraryKind {
    /// Cosmetic header fragments only; never content or theme values.
    pub fn preamble(self) -> Preamble {
        match self {
            LibraryKind::Bootstrap => Preamble {
                style: "",
                import_line: "",
            },
            LibraryKind::MaterialUi => Preamble {
                style: MATERIAL_CSS,
                import_line: MATERIAL_IMPORT,
            },
            LibraryKind::AntDesign => Preamble {
                style: ANT_DESIGN_CSS,
                import_line: ANT_DESIGN_IMPORT,
            },
        }
    }
}

/// Everything the assembler needs, resolved upstream. Assembly itself is a
/// total function: no lookups, no clock, no failure mode.
pub struct PageSpec<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub background: &'a str,
    pub contrast: Contrast,
    pub assets: &'a [ImageAsset],
    pub library: LibraryKind,
    pub year: i32,
}

pub fn render_page(spec: &PageSpec) -> String {
    let Contrast {
        body_text,
        hero_text,
        hero_border,
        hero_shadow,
    } = spec.contrast;
    let extra_style = spec.library.preamble().style;
    let hero_url = spec
        .assets
        .first()
        .map(|a| a.url.as_str())
        .unwrap_or(NO_IMAGE_URL);

    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset='UTF-8'>
  <meta name='viewport' content='width=device-width, initial-scale=1.0'>
  <title>{title}</title>
  <link href='https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css' rel='stylesheet'>
  <style>
    body {{ background-color: {background}; color: {body_text}; }}
    a {{ color: {body_text}; text-decoration: underline; }}
    .hero {{ position: relative; height: 400px; overflow: hidden; }}
    .hero img {{ width: 100%; height: 100%; object-fit: cover; }}
    .hero h1 {{
      position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%);
      background: rgba(0, 0, 0, 0.4); padding: 20px;
      color: {hero_text}; border: 2px solid {hero_border}; border-radius: 10px;
      text-shadow: 2px 2px 8px {hero_shadow};
    }}
    .gallery-caption {{
      font-weight: bold; text-align: center; margin-top: 5px; color: {body_text};
    }}
    {extra_style}
  </style>
</head>
<body>
<div class='hero'>
  <a href='{hero_url}' target='_blank'>
    <img src='{hero_url}' alt='{title}'>
    <h1>{title}</h1>
  </a>
</div>
<section class='container py-5'>
  <h2>About {title}</h2>
  <p>{description}</p>
</section>
<section class='container py-5'>
  <h3>Gallery</h3>
  <div class='row g-4'>"#,
        title = spec.title,
        background = spec.background,
        description = spec.description,
    );

    for asset in spec.assets.iter().skip(1) {
        let caption = if asset.caption.is_empty() {
            spec.title.to_string()
        } else {
            title_case(&asset.caption)
        };
        html.push_str(&format!(
            r#"
    <div class='col-md-4'>
      <a href='{url}' target='_blank'>
        <img src='{url}' alt='{caption}' class='img-fluid rounded'>
      </a>
      <div class='gallery-caption'>{caption}</div>
    </div>"#,
            url = asset.url,
        ));
    }

    html.push_str(&format!(
        r#"
  </div>
</section>
<section class='container py-5'>
  <h3>Contact</h3>
  <p>Email us at:<br><a href='mailto:hello@example.com'>hello@example.com</a></p>
</section>
<footer class='bg-dark text-light text-center p-3'>
  &copy; {year} {title} Inc.
</footer>
</body>
</html>"#,
        year = spec.year,
        title = spec.title,
    ));

    html
}

pub fn render_component(spec: &PageSpec) -> String {
    let import_line = spec.library.preamble().import_line;
    format!(
        r#"import React from 'react';
{import_line}

const App = () => {{
  return (
    <div style={{{{ padding: '2rem' }}}}>
      <h1>{title}</h1>
      <p>{description}</p>
    </div>
  );
}}

export default App;
"#,
        title = spec.title,
        description = spec.description,
    )
}
