use anyhow::Context;
use chrono::Local;
use directory::build_listing;
use resource_client::api::ApiClient;
use resource_client::config::{Action, ClientConfig};
use resource_client::report::{render_hours, render_listing, render_map};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,resource_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let client = ApiClient::new(config.api_url.as_str());
    let records = client
        .fetch_resources()
        .await
        .with_context(|| format!("fetching resources from {}", config.api_url))?;

    // The clock is read once here and handed down.
    let (day, time) = config.clock(Local::now().naive_local());

    let output = match config.action {
        Action::List => {
            let listing = build_listing(&records, day, &time, &config.origin, &config.filter);
            render_listing(&listing)
        }
        Action::Map => render_map(&records),
        Action::Hours => render_hours(&records),
    };

    println!("{output}");
    Ok(())
}
