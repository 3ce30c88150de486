pub mod flows;
pub mod models;
pub mod prompter;
