use clap::ArgMatches;
use tracing::{error, info};

use spellwatch_core::events;
use spellwatch_core::render::{PermissionItem, ProfilePanel};
use spellwatch_core::Polled;

use super::helpers::{load_config, runtime, signed_in_dashboard};

pub(crate) fn handle_whoami_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.whoami_started", json_output = json_output);

    let config = load_config(global)?;
    let Some(dashboard) = signed_in_dashboard(&config)? else {
        return Err("Not signed in".into());
    };

    let result = runtime()?.block_on(dashboard.load_profile());
    let view = dashboard.view();
    let profile = match view.lock() {
        Ok(view) => view.profile().clone(),
        Err(poisoned) => poisoned.into_inner().profile().clone(),
    };

    match result {
        Ok(Polled::Fresh(())) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&profile);
            }

            info!(event = "cli.whoami_completed", username = profile.name);
            Ok(())
        }
        Ok(Polled::SignedOut) => {
            error!(event = "cli.whoami_signed_out");
            Err("Session is no longer authorized".into())
        }
        Err(e) => {
            if !json_output {
                print_profile(&profile);
            }
            eprintln!("❌ Failed to load profile: {}", e);

            error!(event = "cli.whoami_failed", error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn print_profile(profile: &ProfilePanel) {
    println!("User: {}", profile.name);
    println!("Role: {}", profile.role);
    println!("Permissions:");
    for item in &profile.permissions {
        match item {
            PermissionItem::Error(text) => println!("  ❌ {}", text),
            _ => println!("  {}", item.text()),
        }
    }
}
