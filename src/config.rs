use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use portfolio_notification::{EmailJsConfig, SmtpConfig};
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display};
use validator::Validate;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Transport {
    #[default]
    EmailJs,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub transport: Transport,
    pub emailjs: Option<EmailJsConfig>,
    pub smtp: Option<SmtpConfig>,
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

/// Ways to reach the site owner, listed next to the form.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContactConfig {
    #[serde(default)]
    pub channels: Vec<ContactChannel>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: String,
    pub content: String,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy EmailJS environment variables (EMAILJS_SERVICE_ID, ...)
    /// 2. Environment variables (PORTFOLIO__EMAIL__TRANSPORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("email.transport", "emailjs")?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(service_id) = env::var("EMAILJS_SERVICE_ID") {
            builder = builder.set_override("email.emailjs.service_id", service_id)?;
        }
        if let Ok(template_id) = env::var("EMAILJS_TEMPLATE_ID") {
            builder = builder.set_override("email.emailjs.template_id", template_id)?;
        }
        if let Ok(public_key) = env::var("EMAILJS_PUBLIC_KEY") {
            builder = builder.set_override("email.emailjs.public_key", public_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> portfolio_shared::Result<()> {
        match self.email.transport {
            Transport::EmailJs => {
                let Some(emailjs) = &self.email.emailjs else {
                    portfolio_shared::bail!("email.emailjs is required for the emailjs transport");
                };
                emailjs.validate()?;
            }
            Transport::Smtp => {
                let Some(smtp) = &self.email.smtp else {
                    portfolio_shared::bail!("email.smtp is required for the smtp transport");
                };
                smtp.validate()?;
            }
        }

        if self.observability.log_level.trim().is_empty() {
            portfolio_shared::bail!("observability.log_level must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_notification::DEFAULT_EMAILJS_ENDPOINT;

    fn emailjs() -> EmailJsConfig {
        EmailJsConfig {
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            service_id: "service_portfolio".to_string(),
            template_id: "template_contact".to_string(),
            public_key: "public-key".to_string(),
        }
    }

    fn smtp() -> SmtpConfig {
        SmtpConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "noreply@portfolio.localhost".to_string(),
            contact_address: "contact@portfolio.localhost".to_string(),
        }
    }

    fn config(transport: Transport) -> Config {
        Config {
            email: EmailConfig {
                transport,
                emailjs: Some(emailjs()),
                smtp: Some(smtp()),
            },
            observability: ObservabilityConfig::default(),
            contact: ContactConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config(Transport::EmailJs).validate().is_ok());
        assert!(config(Transport::Smtp).validate().is_ok());
    }

    #[test]
    fn test_validation_missing_transport_section() {
        let mut config = config(Transport::Smtp);
        config.email.smtp = None;
        assert!(config.validate().is_err());

        // The inactive section is not required
        config.email.transport = Transport::EmailJs;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_credentials() {
        let mut config = config(Transport::EmailJs);
        if let Some(emailjs) = config.email.emailjs.as_mut() {
            emailjs.template_id = String::new();
        }

        assert!(matches!(
            config.validate(),
            Err(portfolio_shared::Error::Validate(_))
        ));
    }

    #[test]
    fn test_validation_invalid_smtp_address() {
        let mut config = config(Transport::Smtp);
        if let Some(smtp) = config.email.smtp.as_mut() {
            smtp.contact_address = "contact".to_string();
        }

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_log_level() {
        let mut config = config(Transport::EmailJs);
        config.observability.log_level = " ".to_string();

        assert!(matches!(
            config.validate(),
            Err(portfolio_shared::Error::Config(_))
        ));
    }
}
