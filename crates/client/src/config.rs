use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

const DEFAULT_HOST: &str = "http://127.0.0.1:8080";
const DEFAULT_SERVICE: &str = "cumulus";

/// Client-side configuration: where the service lives and how durable
/// session state is keyed on this machine.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the storage service.
    pub base_url: Url,
    /// Service name under which the keychain entry is filed.
    pub keychain_service: String,
    /// Directory for the current-user pointer file. Defaults to the
    /// platform config dir.
    pub state_dir: Option<PathBuf>,
}

/// On-disk shape of the optional `config.toml`. All keys optional;
/// anything missing falls back to the built-in default.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    base_url: Option<Url>,
    keychain_service: Option<String>,
    state_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_HOST).expect("hardcoded URL must parse"),
            keychain_service: DEFAULT_SERVICE.to_string(),
            state_dir: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    ///
    /// Priority: explicit path > `<config dir>/cumulus/config.toml` >
    /// built-in defaults. A missing file is not an error; a present but
    /// malformed file is ignored with a warning.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = explicit
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join(DEFAULT_SERVICE).join("config.toml")));

        let Some(path) = path else {
            return Self::default();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };

        match toml::from_str::<ConfigFile>(&raw) {
            Ok(file) => {
                let defaults = Self::default();
                Self {
                    base_url: file.base_url.unwrap_or(defaults.base_url),
                    keychain_service: file.keychain_service.unwrap_or(defaults.keychain_service),
                    state_dir: file.state_dir,
                }
            }
            Err(err) => {
                tracing::warn!("ignoring malformed config at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Directory holding the current-user pointer file.
    pub fn resolve_state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(&self.keychain_service)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(config.keychain_service, "cumulus");
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = ClientConfig::load(Some(Path::new("/nonexistent/config.toml")));
        assert_eq!(config.keychain_service, "cumulus");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"base_url = "https://cloud.example.com""#).unwrap();
        let config = ClientConfig::load(Some(file.path()));
        assert_eq!(config.base_url.as_str(), "https://cloud.example.com/");
        assert_eq!(config.keychain_service, "cumulus");
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [not toml").unwrap();
        let config = ClientConfig::load(Some(file.path()));
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_state_dir_override_wins() {
        let config = ClientConfig {
            state_dir: Some(PathBuf::from("/tmp/cumulus-test")),
            ..Default::default()
        };
        assert_eq!(config.resolve_state_dir(), PathBuf::from("/tmp/cumulus-test"));
    }
}
