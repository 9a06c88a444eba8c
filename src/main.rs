use log::{info, warn};

mod commands;
mod components;
mod event;
mod feed;

use components::{App, FeedContext};
use feed::FeedConfig;

const TAILWIND_HEAD: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting skill exchange feed");

    let config = FeedConfig::from_env()?;
    let events = match &config.events_path {
        Some(path) => feed::load_events(path).unwrap_or_else(|e| {
            warn!("{}; falling back to the demo feed", e);
            feed::demo_events(&config)
        }),
        None => feed::demo_events(&config),
    };
    info!("Viewer {} sees {} events", config.viewer_id, events.len());

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(dioxus::desktop::Config::new().with_custom_head(TAILWIND_HEAD.to_string()))
        .with_context(FeedContext { config, events })
        .launch(App);

    Ok(())
}
