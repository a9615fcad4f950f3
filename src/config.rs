use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::BusinessProfile;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub mail: MailSettings,
    #[serde(default)]
    pub business: BusinessProfile,
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Restricts CORS to a single origin; permissive when unset
    pub allowed_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailSettings {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    /// Implicit-TLS relay port is used when unset
    pub port: Option<u16>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    pub from_name: Option<String>,
    /// Operator inbox for consultation notifications, defaults to `username`
    pub business_inbox: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl MailSettings {
    pub fn business_inbox(&self) -> &str {
        self.business_inbox
            .as_deref()
            .filter(|inbox| !inbox.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Sender mailbox in `Name <address>` form when a display name is set
    pub fn sender(&self) -> String {
        match self.from_name.as_deref() {
            Some(name) if !name.trim().is_empty() => format!("{} <{}>", name, self.username),
            _ => self.username.clone(),
        }
    }
}

fn default_smtp_host() -> String { "smtp.gmail.com".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
        }
    }
}

fn default_image_base_url() -> String { "/images".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SOL_)
    /// 4. The relay secrets `GMAIL_USER` and `GMAIL_APP_PASSWORD`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., SOL__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SOL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_mail_secrets(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SOL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_mail_secrets(settings)?.try_deserialize()
    }
}

/// Overlay the two relay secrets from the environment onto `mail.*`
fn substitute_mail_secrets(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(user) = env::var("GMAIL_USER") {
        builder = builder.set_override("mail.username", user)?;
    }
    if let Ok(password) = env::var("GMAIL_APP_PASSWORD") {
        builder = builder.set_override("mail.password", password)?;
    }

    builder.build()
}
