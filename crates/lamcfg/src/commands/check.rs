use clap::ArgMatches;
use tracing::error;

use lamcfg_core::config::ConfigStore;

use super::helpers::config_path;

pub(crate) fn handle_check_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path(matches)?;

    match ConfigStore::open(path) {
        Ok(store) => {
            let config = store.config();
            println!(
                "{}: ok ({} admin{})",
                path,
                config.admins().len(),
                if config.admins().len() == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(e) => {
            error!(
                event = "cli.check.failed",
                path = path,
                error = %e
            );
            eprintln!("{}: {}", path, e);
            Err(e.into())
        }
    }
}
