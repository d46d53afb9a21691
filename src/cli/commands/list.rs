use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::pair::Pair;
use crate::ui::messages::{header, info};
use crate::utils::date::now_millis;
use crate::utils::formatting::{due2readable, interval2readable};
use crate::utils::plural;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { due } = cmd {
        let store = open_store(cfg)?;
        let now = now_millis();

        let pairs: Vec<&Pair> = store
            .pairs()
            .iter()
            .filter(|p| !*due || p.is_due(now))
            .collect();

        if pairs.is_empty() {
            if *due {
                info("No pairs due. You are all caught up.");
            } else {
                info("No pairs stored yet. Use `add`, `import` or `module days`.");
            }
            return Ok(());
        }

        header(plural(pairs.len(), "pair", "pairs"));
        print!("{}", render(&pairs, now));
    }
    Ok(())
}

fn render(pairs: &[&Pair], now: i64) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("English", 10),
        Column::new("Zulu", 10),
        Column::new("Interval", 8),
        Column::new("Ease", 4),
        Column::new("Due", 6),
    ]);

    for (i, p) in pairs.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            p.front.clone(),
            p.back.clone(),
            if p.is_new() {
                "new".to_string()
            } else {
                interval2readable(p.interval)
            },
            format!("{:.2}", p.ease),
            due2readable(p.due, now),
        ]);
    }

    table.fit();
    table.render()
}
