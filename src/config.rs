use log::{debug, warn};
use serde::Deserialize;

/// Limits applied by [`HeaderParser`](crate::http::parser::HeaderParser).
///
/// Every limit is optional; an absent limit means unbounded.
///
/// ```toml
/// max_lines = 100
/// max_line_length = 8192
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    /// Maximum number of header lines read, malformed ones included.
    pub max_lines: Option<usize>,

    /// Lines longer than this many bytes are skipped.
    pub max_line_length: Option<usize>,
}

impl HeadersConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<HeadersConfig>(content)
    }

    /// Loads the config from a TOML file, falling back to
    /// [`HeadersConfig::default`] if it cannot be read or deserialized.
    pub fn from_file(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Fail to read {}: {err}, fall back to default config", path);
                return HeadersConfig::default();
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => {
                debug!("Loaded headers config from {}: {:?}", path, config);
                config
            }
            Err(err) => {
                warn!(
                    "Fail to deserialize config file {}: {err}, fall back to default config",
                    path
                );
                HeadersConfig::default()
            }
        }
    }
}
