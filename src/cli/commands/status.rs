use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::queue::schedule;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::{format_millis, now_millis};
use crate::utils::formatting::due2readable;

/// Deck summary: size, new cards, due cards, streak and next due time.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let now = now_millis();

    let total = store.len();
    let new = store.pairs().iter().filter(|p| p.is_new()).count();
    let due = schedule(store.pairs(), now).len();

    header("zulu-bloom status");
    println!("Pairs    : {}", total);
    println!("New      : {}", new);
    println!("Due now  : {}", due);
    println!("Streak   : {}", store.streak().label());

    let next = store
        .pairs()
        .iter()
        .filter(|p| !p.is_due(now))
        .map(|p| p.due)
        .min();
    match next {
        Some(ts) => println!("Next due : {} ({})", format_millis(ts), due2readable(ts, now)),
        None if due > 0 => println!("Next due : now"),
        None => println!("Next due : -"),
    }

    Ok(())
}
