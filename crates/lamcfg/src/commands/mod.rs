use clap::ArgMatches;

use lamcfg_core::events;

mod check;
mod completions;
mod get;
mod set;
mod show;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("show", sub_matches)) => show::handle_show_command(sub_matches),
        Some(("get", sub_matches)) => get::handle_get_command(sub_matches),
        Some(("set", sub_matches)) => set::handle_set_command(sub_matches),
        Some(("check", sub_matches)) => check::handle_check_command(sub_matches),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => Err("Unknown command. Use --help to see available commands.".into()),
    };

    if let Err(e) = &result {
        events::log_app_error(e.as_ref());
    }
    result
}

mod helpers {
    use clap::ArgMatches;
    use lamcfg_core::config::{ConfigError, ConfigStore};

    /// Path to the preferences file from the global `--config` flag.
    pub(crate) fn config_path(matches: &ArgMatches) -> Result<&str, Box<dyn std::error::Error>> {
        let path = matches
            .get_one::<String>("config")
            .ok_or("Config path argument is required")?;
        Ok(path)
    }

    /// Open and load the store named by `--config`.
    pub(crate) fn open_store(matches: &ArgMatches) -> Result<ConfigStore, Box<dyn std::error::Error>> {
        let path = config_path(matches)?;
        let store = ConfigStore::open(path).map_err(|e| match e {
            ConfigError::MissingFile { .. } => {
                tracing::warn!(
                    event = "cli.config.missing_file",
                    path = path,
                    "Preferences file not found"
                );
                e
            }
            _ => e,
        })?;
        Ok(store)
    }
}
