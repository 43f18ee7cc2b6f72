//! One-shot NBA teams extract-and-load
//!
//! - INI configuration loading in `config/`
//! - MySQL connection and append queries in `db/`
//! - The fetch-flatten-print-append job in `jobs/`
//! - Pure transforms and table rendering in `utils/`
//! - Requires a pre-existing `teams` table compatible with the API's fields

pub mod config;
pub mod db;
pub mod jobs;
pub mod utils;
