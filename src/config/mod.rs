//! Configuration management module.
//!
//! Loads the tunnel configuration: comment lines are stripped, environment
//! variables expanded, and the JSON payload decoded into [`Config`].

mod comments;
mod env;
mod service;
mod types;

pub use comments::trim_comments;
pub use env::{expand_with, process_env};
pub use service::ConfigService;
pub use types::{Config, DEFAULT_METHOD};
