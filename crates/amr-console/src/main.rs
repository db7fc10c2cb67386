//! Entry point for the `amr-console` terminal dashboard.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use amr_console::config::BrokerConfig;
use amr_console::feed::spawn_feed;
use amr_console::i18n::{text, Locale};
use amr_console::permissions::PermissionsStore;
use amr_console::ui::{run_console, UiOptions};
use amr_state::Router;

#[derive(Debug, Parser)]
#[command(
    name = "amr-console",
    version,
    about = "Terminal operations console for an AMR fleet",
    after_help = "Examples:\n  amr-console --url mqtt://broker.local:1883\n  AMR_MQTT_URL=mqtt://broker.local amr-console --locale en"
)]
struct Cli {
    /// Broker URL (mqtt://host[:port] or tcp://host[:port]).
    /// Falls back to AMR_MQTT_URL.
    #[arg(long)]
    url: Option<String>,
    /// MQTT client identifier (random suffix when omitted).
    #[arg(long)]
    client_id: Option<String>,
    /// Broker username. Falls back to AMR_MQTT_USERNAME.
    #[arg(long)]
    username: Option<String>,
    /// Broker password. Falls back to AMR_MQTT_PASSWORD.
    #[arg(long)]
    password: Option<String>,
    /// Initial locale (ko or en).
    #[arg(long, default_value = "ko")]
    locale: String,
    /// UI refresh interval in milliseconds.
    #[arg(long, default_value = "250")]
    refresh: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("AMR_CONSOLE_LOG")
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let locale = match cli.locale.to_ascii_lowercase().as_str() {
        "en" => Locale::En,
        _ => Locale::Ko,
    };
    let options = UiOptions {
        locale,
        refresh: Duration::from_millis(cli.refresh.max(50)),
    };

    let config = BrokerConfig::resolve(cli.url, cli.client_id, cli.username, cli.password);
    let mut router = Router::new();

    let (feed, events) = if config.url.is_some() {
        let (handle, rx) = spawn_feed(&config).context("failed to start the broker feed")?;
        (Some(handle), Some(rx))
    } else {
        router.fail_configuration(text(locale, "error.mqttMissing"));
        (None, None)
    };

    let store = PermissionsStore::open_default();
    let result = run_console(router, events, store, options);

    if let Some(feed) = feed {
        feed.shutdown();
    }
    result.context("console session failed")?;
    Ok(())
}
