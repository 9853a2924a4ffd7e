use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const DEFAULT_BACKEND: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRule {
    pub prefix: String,  // "/api", "/static"
    pub target: String,  // "http://localhost:5000"
    #[serde(default)]
    pub secure: bool,  // Verify the backend's TLS certificate
}

impl ProxyRule {
    fn local(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            target: DEFAULT_BACKEND.to_string(),
            secure: false,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerConfig {
    /// Path prefixes forwarded to the backend during development
    #[serde(default = "default_proxy")]
    pub proxy: Vec<ProxyRule>,

    /// Emit source maps for production builds
    #[serde(default)]
    pub production_source_map: bool,

    /// Extra include paths handed to the sass loader
    #[serde(default = "default_sass_include_paths")]
    pub sass_include_paths: Vec<String>,
}

fn default_proxy() -> Vec<ProxyRule> {
    vec![ProxyRule::local("/api"), ProxyRule::local("/static")]
}

fn default_sass_include_paths() -> Vec<String> {
    vec!["./node_modules/".to_string(), "./src/assets/".to_string()]
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            proxy: default_proxy(),
            production_source_map: false,
            sass_include_paths: default_sass_include_paths(),
        }
    }
}

impl DevServerConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("ltss-webui");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the user config directory, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(DevServerConfig::default()),
        };

        Ok(Self::load_or_init(&path))
    }

    /// Load `path`, writing defaults there only if it does not exist yet.
    /// An unreadable or invalid file is left untouched.
    fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return match Self::load_from(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to load config, using defaults: {:#}", e);
                    DevServerConfig::default()
                }
            };
        }

        let config = DevServerConfig::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Could not write default config: {:#}", e);
        }
        config
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: DevServerConfig = toml::from_str(&content).map_err(Error::from)?;
        config.validate()?;
        tracing::debug!("Loaded dev server config from {}", path.display());
        Ok(config)
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self).map_err(Error::from)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// First proxy rule whose prefix matches `path`
    pub fn proxy_target(&self, path: &str) -> Option<&ProxyRule> {
        self.proxy.iter().find(|rule| rule.matches(path))
    }

    pub fn validate(&self) -> std::result::Result<(), Error> {
        for rule in &self.proxy {
            if !rule.prefix.starts_with('/') {
                return Err(Error::InvalidConfig(format!(
                    "proxy prefix '{}' must start with '/'",
                    rule.prefix
                )));
            }
            if !(rule.target.starts_with("http://") || rule.target.starts_with("https://")) {
                return Err(Error::InvalidConfig(format!(
                    "proxy target '{}' must be an http(s) URL",
                    rule.target
                )));
            }
        }
        Ok(())
    }
}
