pub mod pair;
pub mod quality;
pub mod streak;
