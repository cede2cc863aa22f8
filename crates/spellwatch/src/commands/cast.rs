use clap::ArgMatches;
use tracing::{error, info};

use spellwatch_core::ApiError;
use spellwatch_core::events;

use super::helpers::{load_config, runtime, signed_in_dashboard};
use super::status::print_status;

pub(crate) fn handle_cast_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let spell = matches
        .get_one::<String>("spell")
        .ok_or("Spell argument is required")?;

    info!(event = "cli.cast_started", spell = spell);

    let config = load_config(global)?;
    let Some(dashboard) = signed_in_dashboard(&config)? else {
        return Err("Not signed in".into());
    };

    let result = runtime()?.block_on(dashboard.cast(spell));

    if matches!(result, Err(ApiError::AuthorityLost)) {
        error!(event = "cli.cast_signed_out", spell = spell);
        return Err("Session is no longer authorized".into());
    }

    // The audit table was refreshed after the cast either way.
    let print_table = || {
        let view = dashboard.view();
        let view = match view.lock() {
            Ok(view) => view,
            Err(poisoned) => poisoned.into_inner(),
        };
        if view.last_updated().is_some() {
            println!();
            print_status(&view);
        }
    };

    match result {
        Ok(outcome) => {
            println!("✅ {}", outcome.message);
            print_table();

            info!(
                event = "cli.cast_completed",
                spell = spell,
                message = outcome.message
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Cast of '{}' failed: {}", spell, e);
            print_table();

            error!(
                event = "cli.cast_failed",
                spell = spell,
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
