use anyhow::Context;
use clap::Parser;
use scrape_console::{Phase, ServiceConfig};
use std::fs;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServiceConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    config = config.with_env_overrides();
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }

    let file_urls = match &args.url_file {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("reading URLs from {}", path.display()))?,
        ),
        None => None,
    };

    let mut controller = scrape_console::connect(&config)?;
    controller.set_form(args.to_form(file_urls.as_deref()));
    controller.select_tab(args.tab.into());

    let start_time = std::time::Instant::now();
    let phase = controller.submit().await;
    ::log::info!(
        "Submission settled as {:?} in {:.2} seconds",
        phase,
        start_time.elapsed().as_secs_f64()
    );

    if phase == Phase::Error {
        if let Some(message) = &controller.view().error_message {
            eprintln!("Error: {message}");
        }
    }

    if let Some(format) = args.export {
        eprintln!("{}", controller.export(format.into()));
    }

    let page = scrape_console::render::page::document(controller.view());
    match &args.output {
        Some(path) => {
            fs::write(path, page).with_context(|| format!("writing {}", path.display()))?;
            ::log::info!("Results page written to {}", path.display());
        }
        None => print!("{page}"),
    }

    Ok(if phase == Phase::Success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
