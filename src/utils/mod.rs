pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::plural;
