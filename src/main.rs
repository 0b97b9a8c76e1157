//! Interactive mail.tm account generator.

use std::io;

use mailtm_generator::{Config, Menu};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailtm_generator=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    info!(store = %config.store_path.display(), base_url = %config.base_url, "starting");

    let client = config.client_builder().build()?;
    let store = config.store();

    let stdin = io::stdin();
    let mut menu = Menu::new(
        &client,
        &store,
        config.display_tz,
        stdin.lock(),
        io::stdout(),
    );
    menu.run().await?;
    Ok(())
}
