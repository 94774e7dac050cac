use colored::{ColoredString, Colorize};
use fs_err as fs;
use humansize::{format_size, DECIMAL};

use crate::content::ContentSource;
use crate::pipeline::Outcome;

pub fn print_summary(outcome: &Outcome) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━ Generation Results ━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!("  {}: {}  (run {})", "Title".bold(), outcome.title, outcome.run_id);
    println!("  {}: {}", "Keyword".bold(), outcome.keyword);

    let source = match outcome.content.source {
        ContentSource::Reference => "[REFERENCE]".green().bold(),
        ContentSource::Generated => "[GENERATED]".yellow().bold(),
        ContentSource::Static => "[STATIC]".red().bold(),
    };
    println!(
        "  {}: {}  {} words",
        "Content".bold(),
        source,
        outcome.content.text.split_whitespace().count()
    );

    let image_note = if outcome.images.warning.is_some() {
        "[PLACEHOLDER]".red().bold()
    } else {
        "[LIVE]".green().bold()
    };
    println!(
        "  {}: {}  {} assets",
        "Images".bold(),
        image_note,
        outcome.images.assets.len()
    );

    println!(
        "  {}: background {}, hero image {}",
        "Theme".bold(),
        verdict(outcome.background_dark),
        verdict(outcome.hero_dark)
    );
    println!(
        "{}",
        "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold()
    );

    for warning in &outcome.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    println!("\n{}", "Artifacts:".bold());
    println!("  {}", outcome.bundle.markup_path.display());
    println!("  {}", outcome.bundle.snippet_path.display());
    let archive_size = fs::metadata(&outcome.bundle.archive_path)
        .map(|m| m.len())
        .unwrap_or(0);
    println!(
        "  {} ({})",
        outcome.bundle.archive_path.display(),
        format_size(archive_size, DECIMAL)
    );
}

fn verdict(dark: bool) -> ColoredString {
    if dark {
        "dark".cyan()
    } else {
        "light".normal()
    }
}
