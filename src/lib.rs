#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod notify;
pub mod orchestrator;
pub mod page;
pub mod persistence;
pub mod status;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
