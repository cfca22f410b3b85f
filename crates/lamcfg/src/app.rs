use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

/// Settable/gettable field names accepted on the command line.
/// `admins` and `adminstring` are two views of the same list.
pub const FIELDS: [&str; 6] = ["ssl", "host", "port", "passwd", "admins", "adminstring"];

pub fn build_cli() -> Command {
    Command::new("lamcfg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit LDAP account manager preferences")
        .long_about(
            "lamcfg reads and rewrites the line-oriented lam.conf preferences file. \
             Edits are validated before they are applied, and saving preserves every \
             comment and unrecognized line in the file.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to the preferences file (default: ./lam.conf)")
                .default_value("lam.conf")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only emit error-level log output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Show current settings (the password is never shown)")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print one setting's raw value")
                .arg(
                    Arg::new("field")
                        .help("Setting to print")
                        .required(true)
                        .index(1)
                        .value_parser(FIELDS),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Validate, assign and save one setting")
                .arg(
                    Arg::new("field")
                        .help("Setting to change")
                        .required(true)
                        .index(1)
                        .value_parser(FIELDS),
                )
                .arg(
                    Arg::new("value")
                        .help("New value (admins/adminstring take a ';'-separated list)")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("check").about("Check that the preferences file loads"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_set_command() {
        let matches = build_cli()
            .try_get_matches_from(["lamcfg", "set", "host", "ldap.example.org"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "set");
        assert_eq!(sub.get_one::<String>("field").unwrap(), "host");
        assert_eq!(sub.get_one::<String>("value").unwrap(), "ldap.example.org");
    }

    #[test]
    fn test_cli_rejects_unknown_field() {
        let result = build_cli().try_get_matches_from(["lamcfg", "get", "timeout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_config_flag_is_global() {
        let matches = build_cli()
            .try_get_matches_from(["lamcfg", "show", "--config", "/etc/lam/lam.conf"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(
            sub.get_one::<String>("config").unwrap(),
            "/etc/lam/lam.conf"
        );
    }
}
