//! Configuration data types.

use serde::{Deserialize, Deserializer, Serialize};

/// Method used when the payload does not name one.
pub const DEFAULT_METHOD: &str = "plain";

/// Tunnel configuration decoded from the JSON payload.
///
/// Keys absent from the payload (or set to `null`) keep their defaults.
/// Only `method` has a non-empty default.
///
/// Keys are matched exactly: `"Method"` is an unknown key and is ignored,
/// unlike the Go tool, which matched keys case-insensitively. A repeated
/// key keeps its last value when loaded through [`super::ConfigService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// pcap devices to capture on, in priority order
    #[serde(rename = "listen-devices", deserialize_with = "null_as_default")]
    pub listen_devs: Vec<String>,

    /// Device used to reach the upstream
    #[serde(rename = "upstream-device", deserialize_with = "null_as_default")]
    pub up_dev: String,

    #[serde(rename = "upstream-port", deserialize_with = "null_as_default")]
    pub up_port: i64,

    /// Encryption method identifier
    #[serde(deserialize_with = "method_or_default")]
    pub method: String,

    #[serde(deserialize_with = "null_as_default")]
    pub password: String,

    #[serde(deserialize_with = "null_as_default")]
    pub verbose: bool,

    /// Packet filter expressions
    #[serde(deserialize_with = "null_as_default")]
    pub filters: Vec<String>,

    /// Remote endpoint
    #[serde(deserialize_with = "null_as_default")]
    pub server: String,

    #[serde(rename = "listen-port", deserialize_with = "null_as_default")]
    pub listen_port: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_devs: Vec::new(),
            up_dev: String::new(),
            up_port: 0,
            method: DEFAULT_METHOD.to_string(),
            password: String::new(),
            verbose: false,
            filters: Vec::new(),
            server: String::new(),
            listen_port: 0,
        }
    }
}

impl Config {
    /// Listen devices joined with commas, or `""` when there are none.
    pub fn listen_devs_string(&self) -> String {
        self.listen_devs.join(",")
    }

    /// Filters joined with commas, or `""` when there are none.
    pub fn filters_string(&self) -> String {
        self.filters.join(",")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn method_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(method) if !method.is_empty() => Ok(method),
        _ => Ok(DEFAULT_METHOD.to_string()),
    }
}
