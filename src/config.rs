use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Canonical origin used in the sitemap.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.globaltechtrade.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Key material for signed cookies. When empty a random key is
    /// generated at startup, so cookies do not survive a restart.
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

fn default_secure_cookies() -> bool {
    true
}

/// Which delivery channel to use for lead notifications.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Prefer the HTTP API when an API key is present, otherwise SMTP when
    /// a password is present, otherwise no delivery at all.
    #[default]
    Auto,
    Api,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub transport: TransportKind,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_business_address")]
    pub business_address: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::Auto,
            from_name: default_from_name(),
            from_address: default_from_address(),
            business_address: default_business_address(),
            api: ApiConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}

fn default_from_name() -> String {
    "GlobalTech&Trade".to_string()
}

fn default_from_address() -> String {
    "noreply@globaltechtrade.com".to_string()
}

fn default_business_address() -> String {
    "leads@globaltechtrade.com".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default = "default_from_address")]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: default_from_address(),
            password: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

/// Outcome of transport selection. Credentials are optional by contract:
/// `None` means leads are recorded without notification, never a startup
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedTransport {
    Api,
    Smtp,
    None,
}

impl EmailConfig {
    pub fn selected_transport(&self) -> SelectedTransport {
        match self.transport {
            TransportKind::Api if self.api.is_configured() => SelectedTransport::Api,
            TransportKind::Smtp if !self.smtp.password.is_empty() => SelectedTransport::Smtp,
            TransportKind::Auto => {
                if self.api.is_configured() {
                    SelectedTransport::Api
                } else if !self.smtp.password.is_empty() {
                    SelectedTransport::Smtp
                } else {
                    SelectedTransport::None
                }
            }
            _ => SelectedTransport::None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GLOBALTRADE__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("GLOBALTRADE")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy environment variables without prefix, kept for parity with
        // the hosting setup
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(secret) = env::var("SESSION_SECRET") {
            builder = builder.set_override("session.secret", secret)?;
        }
        if let Ok(api_key) = env::var("EMAIL_API_KEY") {
            builder = builder.set_override("email.api.api_key", api_key)?;
        }
        if let Ok(password) = env::var("SMTP_PASSWORD") {
            builder = builder.set_override("email.smtp.password", password)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration. Missing email credentials are not an error;
    /// delivery degrades to a soft skip instead.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.session.secret.is_empty() && self.session.secret.len() < 32 {
            return Err("Session secret must be at least 32 characters long".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            site: SiteConfig::default(),
            session: SessionConfig::default(),
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = base_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_short_session_secret() {
        let mut config = base_config();
        config.session.secret = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_session_secret_is_fine() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_missing_email_credentials_do_not_fail_validation() {
        let config = base_config();
        assert_eq!(config.email.selected_transport(), SelectedTransport::None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_auto_prefers_api_over_smtp() {
        let mut config = base_config();
        config.email.api.base_url = "https://api.mail.example".to_string();
        config.email.api.api_key = "key".to_string();
        config.email.smtp.password = "password".to_string();
        assert_eq!(config.email.selected_transport(), SelectedTransport::Api);
    }

    #[test]
    fn test_auto_falls_back_to_smtp() {
        let mut config = base_config();
        config.email.smtp.password = "password".to_string();
        assert_eq!(config.email.selected_transport(), SelectedTransport::Smtp);
    }

    #[test]
    fn test_explicit_kind_without_credentials_degrades() {
        let mut config = base_config();
        config.email.transport = TransportKind::Api;
        assert_eq!(config.email.selected_transport(), SelectedTransport::None);
    }
}
