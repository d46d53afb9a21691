pub mod import;
pub mod log;
pub mod modules;
pub mod queue;
pub mod scheduler;
pub mod seed;
pub mod session;
pub mod store;
pub mod streak;
