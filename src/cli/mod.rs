use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryKind {
    Bootstrap,
    #[value(alias = "mui")]
    MaterialUi,
    #[value(alias = "antd")]
    AntDesign,
}

#[derive(Parser, Debug)]
#[command(name="sitesmith", version, about="Prompt-to-website generator: content, images, contrast theme, zip bundle")]
pub struct Args {
    /// Site description, e.g. "A travel site on the Himalayas"
    #[arg(long)]
    pub prompt: String,

    /// Page background as #rrggbb (e.g. #fefefe, #2c3e50, #0d1b2a)
    #[arg(long, default_value = "#fefefe")]
    pub background: String,

    /// UI library whose style/import preamble is embedded in the output
    #[arg(long, value_enum, default_value_t = LibraryKind::Bootstrap)]
    pub library: LibraryKind,

    #[arg(long, default_value = "generated_sites")]
    pub output_root: String,

    #[arg(long, default_value = "mistral")]
    pub model: String,

    #[arg(long, default_value_t = 180)]
    pub timeout_secs: u64,

    #[arg(long, default_value_t = 6)]
    pub image_count: usize,

    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
