//! Built-in practice modules that can be loaded on demand.

use crate::errors::{AppError, AppResult};
use crate::models::pair::PairDraft;

const DAYS: [(&str, &str); 7] = [
    (
        "Monday = UMsombuluko",
        "UMsombuluko ngisebenza ekhaya. (On Monday I work from home.)",
    ),
    (
        "Tuesday = ULwesibili",
        "ULwesibili sifunda isiZulu ndawonye. (On Tuesday we study Zulu together.)",
    ),
    (
        "Wednesday = ULwesithathu",
        "ULwesithathu ngivakashela umngani wami. (On Wednesday I visit my friend.)",
    ),
    (
        "Thursday = ULwesine",
        "ULwesine ngipheka ukudla kwakusihlwa. (On Thursday I cook dinner.)",
    ),
    (
        "Friday = ULwesihlanu",
        "ULwesihlanu siyadlala ngemuva komsebenzi. (On Friday we play after work.)",
    ),
    (
        "Saturday = UMgqibelo",
        "UMgqibelo siya emakethe ekuseni. (On Saturday we go to the market in the morning.)",
    ),
    (
        "Sunday = ISonto",
        "ISonto ngiyaphumula nomndeni wami. (On Sunday I rest with my family.)",
    ),
];

/// Names accepted by [`module_pairs`].
pub const MODULE_NAMES: [&str; 1] = ["days"];

/// Pairs of a built-in module plus a short description for status lines.
pub fn module_pairs(name: &str) -> AppResult<(Vec<PairDraft>, &'static str)> {
    match name.to_lowercase().as_str() {
        "days" => Ok((
            DAYS.iter().map(|(f, b)| PairDraft::new(*f, *b)).collect(),
            "day-of-the-week practice",
        )),
        other => Err(AppError::UnknownModule(format!(
            "'{}' (available: {})",
            other,
            MODULE_NAMES.join(", ")
        ))),
    }
}
