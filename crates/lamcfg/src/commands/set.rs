use clap::ArgMatches;
use tracing::info;

use super::helpers::{config_path, open_store};

pub(crate) fn handle_set_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let field = matches
        .get_one::<String>("field")
        .ok_or("Field argument is required")?;
    let value = matches
        .get_one::<String>("value")
        .ok_or("Value argument is required")?;

    let mut store = open_store(matches)?;

    match field.as_str() {
        "ssl" => store.set_ssl(value)?,
        "host" => store.set_host(value)?,
        "port" => store.set_port(value)?,
        "passwd" => store.set_passwd(value),
        "admins" | "adminstring" => store.set_admin_string(value)?,
        _ => unreachable!("field names are constrained by the argument parser"),
    }

    store.save()?;

    info!(
        event = "cli.set.saved",
        field = field.as_str(),
        path = config_path(matches)?
    );
    println!("{} updated", field);

    Ok(())
}
