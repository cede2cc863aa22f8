use clap::ArgMatches;
use tracing::{error, info};

use spellwatch_core::SessionStore;
use spellwatch_core::events;

use super::helpers::{load_config, session_store};

pub(crate) fn handle_logout_command(global: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.logout_started");

    let config = load_config(global)?;
    let store = session_store(&config);

    let previous = store.get();
    match store.clear() {
        Ok(()) => {
            match previous {
                Some(identity) => println!("✅ Signed out {}.", identity.username),
                None => println!("Already signed out."),
            }

            info!(event = "cli.logout_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to sign out: {}", e);

            error!(event = "cli.logout_failed", error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
