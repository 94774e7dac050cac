use std::time::Duration;

use clap::Parser;
use indicatif::ProgressBar;

mod assemble;
mod brightness;
mod bundle;
mod cli;
mod config;
mod content;
mod errors;
mod generator;
mod images;
mod keyword;
mod log;
mod pipeline;
mod theme;
mod ux;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let mut cfg = config::Config::load(args.config.as_deref())?;
    cfg.output_root = args.output_root.clone();
    cfg.model = args.model.clone();
    cfg.timeout_secs = args.timeout_secs;
    cfg.image_count = args.image_count;

    if args.debug {
        log::debug_stage("config", &format!("{cfg:?}"));
    }

    let generator = generator::make_generator(cfg.model.clone(), cfg.timeout_secs);
    let request = pipeline::Request {
        prompt: args.prompt.clone(),
        background: args.background.clone(),
        library: args.library,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("generating site for \"{}\"", args.prompt));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = pipeline::generate(&cfg, generator.as_ref(), &request, args.debug).await;
    spinner.finish_and_clear();

    ux::print_summary(&outcome?);
    Ok(())
}
