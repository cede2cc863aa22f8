use std::sync::Arc;

use clap::ArgMatches;
use tracing::{error, warn};

use spellwatch_core::api::{ApiClient, HttpTransport};
use spellwatch_core::auth::{self, Navigator, Route};
use spellwatch_core::config::{Config, SpellwatchConfig};
use spellwatch_core::render::{DashboardView, RollingChart};
use spellwatch_core::{Dashboard, FileSessionStore, PollLoop};

pub const NOT_SIGNED_IN_HINT: &str = "Not signed in. Run 'spellwatch login <username>'.";

/// The CLI has no routes to switch; navigation becomes a hint on stderr.
pub struct CliNavigator;

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        if route == Route::Login {
            eprintln!("{}", NOT_SIGNED_IN_HINT);
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
///
/// `--api-url` is applied on top and the result validated.
pub fn load_config(matches: &ArgMatches) -> Result<SpellwatchConfig, Box<dyn std::error::Error>> {
    let mut config = match SpellwatchConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.spellwatch/config.toml and ./.spellwatch/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            SpellwatchConfig::default()
        }
    };

    if let Some(api_url) = matches.get_one::<String>("api-url") {
        config.api.base_url = Some(api_url.clone());
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid configuration: {}", e);
        error!(event = "cli.config.invalid", error = %e);
        return Err(e.into());
    }

    Ok(config)
}

pub fn session_store(config: &SpellwatchConfig) -> Arc<FileSessionStore> {
    let runtime = Config::new();
    Arc::new(FileSessionStore::new(config.session.file_or_default(&runtime)))
}

pub fn build_client(
    config: &SpellwatchConfig,
) -> Result<ApiClient<HttpTransport>, Box<dyn std::error::Error>> {
    let transport = HttpTransport::from_config(&config.api)?;
    Ok(ApiClient::new(
        transport,
        config.endpoints.clone(),
        session_store(config),
        Arc::new(CliNavigator),
    ))
}

/// Dashboard controller for one-shot commands. Returns `None` after
/// printing the sign-in hint when no identity is stored.
pub fn signed_in_dashboard(
    config: &SpellwatchConfig,
) -> Result<Option<Dashboard<HttpTransport>>, Box<dyn std::error::Error>> {
    let client = build_client(config)?;
    if !auth::check(client.store().as_ref(), client.navigator().as_ref()) {
        return Ok(None);
    }

    Ok(Some(Dashboard::new(
        client,
        DashboardView::with_chart(Box::new(RollingChart::new())),
        PollLoop::new(config.poll.interval()),
    )))
}

/// Single-threaded runtime for one request-response command.
pub fn runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}
