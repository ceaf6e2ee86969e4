use clap::ArgMatches;
use crate::error::SmelResult;
use crate::formatting::print_events;
use crate::store::SessionStore;

/// Prints the events a fresh session starts with.
pub fn handle_events(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_events_impl(matches).map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

fn handle_events_impl(matches: &ArgMatches) -> SmelResult<()> {
    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("simple");
    let store = SessionStore::new();
    print_events(store.list_events(), format)
}
