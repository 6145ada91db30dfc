pub mod config;
pub mod input;
mod main_lib;
pub mod output;

pub use main_lib::{init_tracing, run};
