#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub use config::PingConfig;
pub use ping_error::{GenericError, PingError, PingResult};
pub use ping_output::*;
pub use ping_runner::*;
pub use ping_statistics::*;

pub mod cli;
pub mod config;
pub mod icmp;
mod ping_error;
mod ping_output;
mod ping_runner;
mod ping_statistics;
pub mod utils;
