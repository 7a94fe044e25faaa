use anyhow::{Context, bail};
use serde::Deserialize;
use std::{path::Path, time::Duration};

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub osc: OscConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub lastfm: LastFmConfig,
}

impl Config {
    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            log::warn!(
                "Config file {} does not exist, falling back to defaults",
                path.to_string_lossy()
            );
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.osc.port == 0 {
            bail!("osc.port must not be 0");
        }
        if self.player.update_rate_ms < 10 {
            bail!("player.update_rate_ms must be at least 10");
        }
        if self.player.retry_interval_secs < 1 {
            bail!("player.retry_interval_secs must be at least 1");
        }
        if self.lastfm.timeout_secs < 1 {
            bail!("lastfm.timeout_secs must be at least 1");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OscConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl OscConfig {
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlayerConfig {
    /// poll interval in milliseconds
    #[serde(default = "default_update_rate_ms")]
    pub update_rate_ms: u64,
    /// how long to wait before looking for a media player again
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
}

impl PlayerConfig {
    pub fn update_rate(&self) -> Duration {
        Duration::from_millis(self.update_rate_ms)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_interval_secs)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            update_rate_ms: default_update_rate_ms(),
            retry_interval_secs: default_retry_interval_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LastFmConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LastFmConfig {
    /// Lookup only runs when it is switched on and an api key is present.
    pub fn lookup_enabled(&self) -> bool {
        self.enabled && self.api_key().is_some()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LastFmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            username: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9025
}

fn default_update_rate_ms() -> u64 {
    500
}

fn default_retry_interval_secs() -> u64 {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
[osc]
host = "192.168.1.20"
port = 9000

[player]
update_rate_ms = 250
retry_interval_secs = 3

[lastfm]
enabled = true
api_key = "abc123"
username = "squeaker"
timeout_secs = 4
"#;

        let cfg: Config = toml::from_str(toml_str)?;
        cfg.validate()?;

        assert_eq!(cfg.osc.target(), "192.168.1.20:9000");
        assert_eq!(cfg.player.update_rate(), Duration::from_millis(250));
        assert_eq!(cfg.player.retry_interval(), Duration::from_secs(3));
        assert!(cfg.lastfm.lookup_enabled());
        assert_eq!(cfg.lastfm.api_key(), Some("abc123"));
        assert_eq!(cfg.lastfm.username(), Some("squeaker"));
        assert_eq!(cfg.lastfm.timeout(), Duration::from_secs(4));

        Ok(())
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str("")?;

        assert_eq!(cfg.osc.host, "127.0.0.1");
        assert_eq!(cfg.osc.port, 9025);
        assert_eq!(cfg.player.update_rate_ms, 500);
        assert_eq!(cfg.player.retry_interval_secs, 10);
        assert!(!cfg.lastfm.enabled);
        assert!(!cfg.lastfm.lookup_enabled());

        Ok(())
    }

    #[test]
    fn test_lookup_disabled_without_api_key() -> anyhow::Result<()> {
        let toml_str = r#"
[lastfm]
enabled = true
api_key = "  "
"#;
        let cfg: Config = toml::from_str(toml_str)?;

        assert!(cfg.lastfm.enabled);
        assert!(!cfg.lastfm.lookup_enabled());

        Ok(())
    }

    #[test]
    fn test_validate_rejects_zero_port() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str("[osc]\nport = 0\n")?;
        assert!(cfg.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_load_missing_file_falls_back() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let cfg = Config::load(&tmp.path().join("missing.toml"))?;

        assert_eq!(cfg.osc.port, 9025);
        assert!(!cfg.lastfm.enabled);

        Ok(())
    }

    #[test]
    fn test_load_file() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[player]\nupdate_rate_ms = 1000\n")?;

        let cfg = Config::load(&path)?;

        assert_eq!(cfg.player.update_rate_ms, 1000);
        assert_eq!(cfg.osc.port, 9025);

        Ok(())
    }

    #[test]
    fn test_load_invalid_file_fails() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[player\nupdate_rate_ms = ")?;

        assert!(Config::load(&path).is_err());

        Ok(())
    }
}
