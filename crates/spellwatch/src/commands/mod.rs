use clap::ArgMatches;
use tracing::error;

use spellwatch_core::events;

pub mod helpers;

mod cast;
mod completions;
mod login;
mod logout;
mod status;
mod whoami;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup(events::Frontend::Cli);

    let result = match matches.subcommand() {
        Some(("login", sub_matches)) => login::handle_login_command(matches, sub_matches),
        Some(("logout", _)) => logout::handle_logout_command(matches),
        Some(("whoami", sub_matches)) => whoami::handle_whoami_command(matches, sub_matches),
        Some(("status", sub_matches)) => status::handle_status_command(matches, sub_matches),
        Some(("cast", sub_matches)) => cast::handle_cast_command(matches, sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown(events::Frontend::Cli);
    result
}
