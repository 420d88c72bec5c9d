//! ikago-config: configuration loader for the IkaGo packet tunnel.
//!
//! Reads a JSON config file that may carry `#` comment lines and
//! `$NAME` / `${NAME}` environment references, and decodes it into a
//! typed [`Config`] with defaults.

pub mod config;
pub mod error;
pub mod logger;

pub use config::{Config, ConfigService};
pub use error::{ConfigError, ConfigErrorKind, FilterError};
