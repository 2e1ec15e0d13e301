pub mod config;
pub mod error;
pub mod types;

pub use config::TorqueConfig;
pub use error::{Result, TorqueError};
pub use types::*;
