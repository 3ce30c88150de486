pub mod cli;
pub mod context;
pub mod countdown;
pub mod holidays;
pub mod models;
pub mod persist;
pub mod store;
pub mod transfer;
pub mod types;
