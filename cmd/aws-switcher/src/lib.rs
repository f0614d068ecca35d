#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::missing_panics_doc
)]

mod cli;
pub use cli::main;

pub mod commands;
pub mod config;
pub mod print;
pub mod profile;
pub mod select;

pub use commands::Root;
