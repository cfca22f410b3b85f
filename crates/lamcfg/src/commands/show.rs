use clap::ArgMatches;

use super::helpers::open_store;

pub(crate) fn handle_show_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(matches)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(store.config())?);
    } else {
        println!("{}", store.config());
    }

    Ok(())
}
