//! Terminal front-end for a review session.
//!
//! Each card is shown prompt-first; Enter reveals the answer, then a rating
//! (`a`/`g` or a digit 0-5) schedules it. `q` leaves at any prompt.

use crate::cli::commands::open_store;
use crate::config::{Config, PromptSide};
use crate::core::scheduler;
use crate::core::session::{Session, SessionState};
use crate::core::store::{KeyValueStore, PairStore};
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::pair::Pair;
use crate::models::quality::Quality;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{now_millis, today};
use crate::utils::formatting::{bold, interval2readable, italic, progress_bar};
use crate::utils::plural;
use std::io::{self, BufRead, Write};

const WRAP_WIDTH: usize = 72;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let reviewed = run_session(&mut store, &mut input, cfg.prompt_side)?;

    if reviewed > 0 {
        ttlog_quiet(
            store.backend().conn(),
            "review",
            "session",
            &format!(
                "{} reviewed, streak {}",
                plural(reviewed, "card", "cards"),
                store.streak().label()
            ),
        );
    }
    Ok(())
}

/// Drive one session over `input`; returns how many cards were rated.
pub fn run_session<S: KeyValueStore, R: BufRead>(
    store: &mut PairStore<S>,
    input: &mut R,
    side: PromptSide,
) -> AppResult<usize> {
    let mut session = Session::new();

    if session.start(store, now_millis()) == SessionState::CaughtUp {
        info("You are all caught up. Come back later!");
        return Ok(0);
    }
    info(format!(
        "Your next review is ready ({} due).",
        plural(session.remaining() + 1, "card", "cards")
    ));

    'cards: while let Some(id) = session.current() {
        let pair = store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::UnknownPair(id.to_string()))?;
        let (prompt, answer) = sides(&pair, side);

        print_progress(&session);
        println!("[{}]", pair.tag());
        println!("{}", bold(&textwrap::fill(prompt, WRAP_WIDTH)));

        match ask(input, "Press Enter to reveal (q to quit): ")? {
            None => break,
            Some(line) if is_quit(&line) => break,
            Some(_) => {}
        }

        session.reveal()?;
        println!("{}", italic(&textwrap::fill(answer, WRAP_WIDTH)));

        let (again, good) = scheduler::preview(&pair, now_millis());
        let question = format!(
            "Rate: [a]gain ({}) / [g]ood ({}) / 0-5, q to quit: ",
            interval2readable(again.interval),
            interval2readable(good.interval)
        );

        loop {
            let line = match ask(input, &question)? {
                None => break 'cards,
                Some(line) if is_quit(&line) => break 'cards,
                Some(line) => line,
            };

            match Quality::from_input(&line) {
                Some(q) => {
                    let rated = session.rate(store, q, now_millis(), today())?;
                    println!(
                        "→ next review {}",
                        interval2readable(rated.outcome.interval)
                    );
                    break;
                }
                None => warning(format!("Unrecognised rating '{}'.", line.trim())),
            }
        }
    }

    let reviewed = session.reviewed();
    if session.state() == SessionState::Complete {
        print_progress(&session);
        success("Session complete. Great work!");
    } else {
        info(format!(
            "Session paused: {} reviewed, {} left.",
            reviewed,
            session.remaining() + usize::from(session.current().is_some())
        ));
    }
    if reviewed > 0 {
        info(format!("Streak: {}", store.streak().label()));
    }

    Ok(reviewed)
}

fn sides(pair: &Pair, side: PromptSide) -> (&str, &str) {
    match side {
        PromptSide::Back => (pair.back.as_str(), pair.front.as_str()),
        PromptSide::Front => (pair.front.as_str(), pair.back.as_str()),
    }
}

fn print_progress(session: &Session) {
    let p = session.progress();
    println!(
        "{} {} / {} reviewed",
        progress_bar(p.percent, 20),
        p.reviewed,
        p.total
    );
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "q" | "quit")
}

/// Print `question` and read one line; `None` on end of input.
fn ask<R: BufRead>(input: &mut R, question: &str) -> AppResult<Option<String>> {
    print!("{}", question);
    io::stdout().flush().ok();

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line))
}
