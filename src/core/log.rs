use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "import" => Colour::Cyan,
        "module" => Colour::Blue,
        "review" => Colour::Yellow,
        "export" => Colour::Purple,
        "seed" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern");

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut label = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                label.push_str(&format!(" ({target})"));
            }

            // width is computed on the visible text only
            let visible = strip_ansi(&ansi, &label).chars().count();
            let padding = " ".repeat(op_w.saturating_sub(visible));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                label,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
