use clap::ArgMatches;
use tracing::{error, info};

use spellwatch_core::LoginFlow;
use spellwatch_core::events;

use super::helpers::{build_client, load_config, runtime};

pub(crate) fn handle_login_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let username = matches
        .get_one::<String>("username")
        .ok_or("Username argument is required")?;

    info!(event = "cli.login_started", username = username);

    let config = load_config(global)?;
    let client = build_client(&config)?;
    let flow = LoginFlow::new(&client);

    match runtime()?.block_on(flow.submit(username)) {
        Ok(identity) => {
            println!(
                "✅ Signed in as {} ({})",
                identity.username, identity.role
            );
            println!("   Run 'spellwatch status' or 'spellwatch-ui' to open the dashboard.");

            info!(
                event = "cli.login_completed",
                username = identity.username,
                role = identity.role
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Login failed: {}", e);

            error!(
                event = "cli.login_failed",
                username = username,
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
