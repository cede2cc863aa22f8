use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("spellwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sign in to the spell-audit dashboard and inspect it from the terminal")
        .long_about("spellwatch talks to the spell-audit backend: it signs you in, shows your profile and permissions, prints the audit table with the latest latency and throughput readouts, and casts spells on your behalf. For a live, auto-refreshing view run 'spellwatch-ui'.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Backend base URL (overrides config, default: http://127.0.0.1:8000)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("login")
                .about("Sign in and remember the identity for later commands")
                .arg(
                    Arg::new("username")
                        .help("Username known to the backend")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("logout")
                .about("Forget the signed-in identity")
        )
        .subcommand(
            Command::new("whoami")
                .about("Show the signed-in profile and its permissions")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("status")
                .about("Show the audit table and the latest performance readouts")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("cast")
                .about("Cast a spell, then show the refreshed audit table")
                .arg(
                    Arg::new("spell")
                        .help("Name of the spell to cast")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(clap_complete::Shell))
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "spellwatch");
    }

    #[test]
    fn test_cli_login_requires_username() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["spellwatch", "login"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_login_username() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["spellwatch", "login", "harry_potter"])
            .unwrap();
        let sub = matches.subcommand_matches("login").unwrap();
        assert_eq!(
            sub.get_one::<String>("username").map(String::as_str),
            Some("harry_potter")
        );
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec![
                "spellwatch",
                "status",
                "-v",
                "--api-url",
                "http://ministry:9000",
                "--json",
            ])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        assert_eq!(
            matches.get_one::<String>("api-url").map(String::as_str),
            Some("http://ministry:9000")
        );
        assert!(matches.subcommand_matches("status").unwrap().get_flag("json"));
    }

    #[test]
    fn test_cli_cast_spell_with_spaces() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["spellwatch", "cast", "Wingardium Leviosa"])
            .unwrap();
        let sub = matches.subcommand_matches("cast").unwrap();
        assert_eq!(
            sub.get_one::<String>("spell").map(String::as_str),
            Some("Wingardium Leviosa")
        );
    }

    #[test]
    fn test_cli_completions_rejects_unknown_shell() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["spellwatch", "completions", "cmd.exe"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        assert!(app.try_get_matches_from(vec!["spellwatch"]).is_err());
    }
}
