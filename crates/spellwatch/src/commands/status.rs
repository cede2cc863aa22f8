use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use spellwatch_core::events;
use spellwatch_core::render::{AuditRow, DashboardView, Readouts};
use spellwatch_core::Polled;

use super::helpers::{load_config, runtime, signed_in_dashboard};
use crate::table::AuditTableFormatter;

#[derive(Serialize)]
struct StatusReport<'a> {
    rows: &'a [AuditRow],
    readouts: Readouts,
    fetched_at: Option<String>,
}

pub(crate) fn handle_status_command(
    global: &ArgMatches,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.status_started", json_output = json_output);

    let config = load_config(global)?;
    let Some(dashboard) = signed_in_dashboard(&config)? else {
        return Err("Not signed in".into());
    };

    match runtime()?.block_on(dashboard.refresh()) {
        Ok(Polled::Fresh(())) => {
            let view = dashboard.view();
            let view = match view.lock() {
                Ok(view) => view,
                Err(poisoned) => poisoned.into_inner(),
            };

            if json_output {
                let report = StatusReport {
                    rows: view.audit_rows(),
                    readouts: view.readouts(),
                    fetched_at: view.last_updated().map(|t| t.to_rfc3339()),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_status(&view);
            }

            info!(
                event = "cli.status_completed",
                row_count = view.audit_rows().len()
            );
            Ok(())
        }
        Ok(Polled::SignedOut) => {
            error!(event = "cli.status_signed_out");
            Err("Session is no longer authorized".into())
        }
        Err(e) => {
            eprintln!("❌ Failed to load dashboard: {}", e);

            error!(event = "cli.status_failed", error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

pub(crate) fn print_status(view: &DashboardView) {
    println!("Spell audit:");
    AuditTableFormatter::new(view.audit_rows()).print_table(view.audit_rows());

    let readouts = view.readouts();
    println!(
        "Latency: {}   Events/s: {}",
        format_readout(readouts.latency_ms, "ms"),
        format_readout(readouts.events_per_second, "")
    );
}

fn format_readout(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{}{}", value, unit),
        None => "-".to_string(),
    }
}
