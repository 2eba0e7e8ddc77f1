//! Configuration, filesystem paths, and logging for the Medibook apps.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{Config, DEFAULT_API_KEY, DEFAULT_API_URL, DEFAULT_LOG_LEVEL};
pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, parse_level};
pub use paths::Paths;
