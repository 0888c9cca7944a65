pub mod args;
pub mod catalog;
pub mod config;
pub mod error;
pub mod instance;
pub mod log;
pub mod materialize;
pub mod placeholder;
pub mod prompt;
pub mod registry;
pub mod stack;
pub mod values;

pub use error::{Error, Result};
