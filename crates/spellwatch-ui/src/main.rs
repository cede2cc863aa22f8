//! spellwatch-ui: terminal dashboard for spellwatch
//!
//! Ratatui front end over spellwatch-core: a login screen and a live
//! dashboard refreshed on the poll interval.

use std::sync::Arc;

use clap::{Arg, ArgAction, ArgMatches, Command};

use spellwatch_core::config::Config;
use spellwatch_core::events;
use spellwatch_core::{
    ApiClient, Dashboard, DashboardView, FileSessionStore, HttpTransport, MemorySessionStore,
    PollLoop, RollingChart, Route, SessionStore, SpellwatchConfig, init_file_logging,
};

mod actions;
mod refresh;
mod runner;
mod state;
mod views;

#[cfg(test)]
mod testing;

use state::RouteNavigator;

fn build_cli() -> Command {
    Command::new("spellwatch-ui")
        .about("Live spell-audit dashboard in the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .help("Keep the sign-in in memory only; it ends when the UI exits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Backend base URL (overrides config)")
                .value_name("URL"),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_file_logging(&Config::new().ui_log_file());
    events::log_app_startup(events::Frontend::Ui);

    if let Err(e) = run(&matches) {
        eprintln!("❌ {}", e);
        events::log_app_error(e.as_ref());
        std::process::exit(1);
    }

    events::log_app_shutdown(events::Frontend::Ui);
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(matches)?;
    let store = session_store(&config, matches.get_flag("ephemeral"));

    let (navigator, routes) = RouteNavigator::new(Route::Dashboard);
    let client = ApiClient::new(
        HttpTransport::from_config(&config.api)?,
        config.endpoints.clone(),
        store,
        Arc::new(navigator),
    );
    let dashboard = Arc::new(Dashboard::new(
        client,
        DashboardView::with_chart(Box::new(RollingChart::new())),
        PollLoop::new(config.poll.interval()),
    ));

    // Without an identity this navigates to the login route before the
    // first frame is drawn.
    dashboard.init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(runner::run(dashboard, routes))?;
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<SpellwatchConfig, Box<dyn std::error::Error>> {
    let mut config = match SpellwatchConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.spellwatch/config.toml and ./.spellwatch/config.toml for syntax errors.",
                e
            );
            tracing::warn!(event = "ui.config.load_failed", error = %e);
            SpellwatchConfig::default()
        }
    };

    if let Some(api_url) = matches.get_one::<String>("api-url") {
        config.api.base_url = Some(api_url.clone());
    }

    config.validate()?;
    Ok(config)
}

fn session_store(config: &SpellwatchConfig, ephemeral: bool) -> Arc<dyn SessionStore> {
    if ephemeral {
        tracing::info!(event = "ui.session.ephemeral");
        return Arc::new(MemorySessionStore::new());
    }
    Arc::new(FileSessionStore::new(
        config.session.file_or_default(&Config::new()),
    ))
}
