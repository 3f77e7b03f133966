use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/rwget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RwgetConfig {
    /// Size of each body chunk written to disk and reported as progress.
    pub chunk_size: usize,
    /// File that receives the report in background mode (relative to the working directory).
    pub log_file_name: String,
    /// Filename used when the URL ends in `/`.
    pub fallback_filename: String,
    /// TCP/TLS connect timeout in seconds. Transfers themselves are not time-bounded.
    pub connect_timeout_secs: u64,
    /// Maximum redirects followed per request.
    pub max_redirections: u32,
    /// Optional `User-Agent` header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for RwgetConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            log_file_name: "wget-log".to_string(),
            fallback_filename: "download".to_string(),
            connect_timeout_secs: 30,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rwget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RwgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RwgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RwgetConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RwgetConfig::default();
        assert_eq!(cfg.chunk_size, 1024);
        assert_eq!(cfg.log_file_name, "wget-log");
        assert_eq!(cfg.fallback_filename, "download");
        assert_eq!(cfg.max_redirections, 10);
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RwgetConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RwgetConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.chunk_size, cfg.chunk_size);
        assert_eq!(parsed.log_file_name, cfg.log_file_name);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            chunk_size = 4096
            log_file_name = "fetch.log"
            fallback_filename = "index.html"
            connect_timeout_secs = 5
            max_redirections = 3
            user_agent = "rwget/0.1"
        "#;
        let cfg: RwgetConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.chunk_size, 4096);
        assert_eq!(cfg.log_file_name, "fetch.log");
        assert_eq!(cfg.fallback_filename, "index.html");
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.max_redirections, 3);
        assert_eq!(cfg.user_agent.as_deref(), Some("rwget/0.1"));
    }

    #[test]
    fn config_toml_user_agent_optional() {
        let toml = r#"
            chunk_size = 1024
            log_file_name = "wget-log"
            fallback_filename = "download"
            connect_timeout_secs = 30
            max_redirections = 10
        "#;
        let cfg: RwgetConfig = toml::from_str(toml).unwrap();
        assert!(cfg.user_agent.is_none());
    }
}
