use regex::Regex;
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;
use crate::generator::Generator;
use crate::keyword::title_case;

const MIN_CONTENT_WORDS: usize = 20;
const SUMMARY_TRIGGER_WORDS: usize = 40;
const PARAGRAPH_LIMIT: usize = 3;
const SENTENCE_LIMIT: usize = 3;

const DISAMBIGUATION_MARKERS: [&str; 3] = [
    "may refer to",
    "disambiguation",
    "message may be displayed",
];

const LOW_INFORMATION_PREFIXES: [&str; 4] =
    ["may refer to", "cut.", "this article", "this message"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Reference,
    Generated,
    Static,
}

/// Resolved descriptive text, tagged with the path that produced it.
/// Never empty; a provider failure surfaces as a warning, not as an error
/// and not as page content.
#[derive(Debug, Clone, Serialize)]
pub struct ContentBlock {
    pub text: String,
    pub source: ContentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Fallback chain, strictly ordered: reference lookup, generative fallback,
/// static sentence. Exactly one block per run.
pub async fn resolve(
    cfg: &Config,
    client: &Client,
    generator: &dyn Generator,
    topic: &str,
) -> ContentBlock {
    if let Some(text) = reference_lookup(cfg, client, topic).await {
        if passes_gate(&text) {
            return ContentBlock {
                text,
                source: ContentSource::Reference,
                warning: None,
            };
        }
    }

    let instruction = format!("Write a short informative paragraph about {topic}.");
    match generator.generate(&instruction).await {
        Ok(text) if text.split_whitespace().count() > MIN_CONTENT_WORDS => ContentBlock {
            text,
            source: ContentSource::Generated,
            warning: None,
        },
        Ok(_) => ContentBlock {
            text: static_sentence(topic),
            source: ContentSource::Static,
            warning: None,
        },
        Err(e) => ContentBlock {
            text: static_sentence(topic),
            source: ContentSource::Static,
            warning: Some(format!("text generation failed: {e:#}")),
        },
    }
}

fn static_sentence(topic: &str) -> String {
    format!("{} is an interesting topic worth exploring.", title_case(topic))
}

async fn reference_lookup(cfg: &Config, client: &Client, topic: &str) -> Option<String> {
    let url = format!(
        "{}/{}",
        cfg.reference_base_url.trim_end_matches('/'),
        topic.replace(' ', "_")
    );
    let body = client
        .get(&url)
        .send()
        .await
        .ok()?
        .error_for_status()
        .ok()?
        .text()
        .await
        .ok()?;
    summarize_reference(&body)
}

/// First three paragraph blocks, disambiguation paragraphs dropped,
/// citation markers stripped. Yields text only when the remainder is long
/// enough to be worth summarizing, truncated to its first three sentences.
pub(crate) fn summarize_reference(html: &str) -> Option<String> {
    let paragraph = Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid literal pattern");
    let tag = Regex::new(r"(?s)<[^>]+>").expect("valid literal pattern");
    let citation = Regex::new(r"\[\d+\]").expect("valid literal pattern");

    let mut text = String::new();
    for cap in paragraph.captures_iter(html).take(PARAGRAPH_LIMIT) {
        let para = unescape(&tag.replace_all(&cap[1], ""));
        if DISAMBIGUATION_MARKERS.iter().any(|m| para.contains(m)) {
            continue;
        }
        text.push_str(&para);
    }

    let clean = citation.replace_all(text.trim(), "").to_string();
    if clean.split_whitespace().count() <= SUMMARY_TRIGGER_WORDS {
        return None;
    }

    let summary = clean
        .split('.')
        .take(SENTENCE_LIMIT)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(". ");
    Some(format!("{summary}."))
}

pub(crate) fn passes_gate(text: &str) -> bool {
    if text.split_whitespace().count() <= MIN_CONTENT_WORDS {
        return false;
    }
    let lowered = text.trim().to_lowercase();
    !LOW_INFORMATION_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

fn unescape(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}
