//! Configuration loading for the WebJasa site.
//! Reads webjasa.toml from the current directory or the path in WEBJASA_CONFIG.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use webjasa_common::{Result, SiteError};

pub const CONFIG_ENV: &str = "WEBJASA_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "webjasa.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host()       -> String  { "127.0.0.1".to_string() }
fn default_port()       -> u16     { 3000 }
fn default_static_dir() -> PathBuf { PathBuf::from("static") }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| SiteError::Config(format!("invalid listen address {}:{}: {e}", self.host, self.port)))
    }
}

/// Company details shown in the navigation shell, footer, and contact page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Digits only, international format, used to build the wa.me link.
    #[serde(default = "default_whatsapp")]
    pub whatsapp_number: String,
    #[serde(default = "default_phone_display")]
    pub phone_display: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_address")]
    pub address_lines: Vec<String>,
    #[serde(default = "default_founded")]
    pub founded_year: i32,
}

fn default_name()          -> String { "WebJasa".to_string() }
fn default_tagline()       -> String { "Jasa Pembuatan Website Profesional".to_string() }
fn default_whatsapp()      -> String { "6281234567890".to_string() }
fn default_phone_display() -> String { "+62 812-3456-7890".to_string() }
fn default_email()         -> String { "info@webjasa.com".to_string() }
fn default_founded()       -> i32    { 2019 }

fn default_address() -> Vec<String> {
    vec!["Jakarta Selatan".to_string(), "DKI Jakarta, Indonesia".to_string()]
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            whatsapp_number: default_whatsapp(),
            phone_display: default_phone_display(),
            email: default_email(),
            address_lines: default_address(),
            founded_year: default_founded(),
        }
    }
}

impl SiteInfo {
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }

    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "webjasa=debug,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

impl Config {
    /// Path from WEBJASA_CONFIG, or webjasa.toml.
    pub fn path() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Loads the config file. Returns `Ok(None)` when it does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(Some(config))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.email, "info@webjasa.com");
        assert_eq!(config.logging.filter, "webjasa=debug,info");
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 8080

            [site]
            whatsapp_number = "6289900001111"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.site.whatsapp_url(), "https://wa.me/6289900001111");
        assert_eq!(config.site.name, "WebJasa");
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = Config::from_toml("[server\nport = ").unwrap_err();
        assert!(matches!(err, SiteError::Toml(_)));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let loaded = Config::load_from(Path::new("/nonexistent/webjasa.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
        let bad = ServerConfig { host: "not a host".into(), ..ServerConfig::default() };
        assert!(bad.socket_addr().is_err());
    }
}
