use clap::ArgMatches;

use super::helpers::open_store;

pub(crate) fn handle_get_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let field = matches
        .get_one::<String>("field")
        .ok_or("Field argument is required")?;

    let store = open_store(matches)?;
    let config = store.config();

    match field.as_str() {
        "ssl" => println!("{}", config.ssl()),
        "host" => println!("{}", config.host()),
        "port" => println!("{}", config.port()),
        "passwd" => println!("{}", config.passwd()),
        "adminstring" => println!("{}", config.admin_string()),
        "admins" => {
            for admin in config.admins() {
                println!("{admin}");
            }
        }
        _ => unreachable!("field names are constrained by the argument parser"),
    }

    Ok(())
}
