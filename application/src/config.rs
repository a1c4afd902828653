//! [`Config`]-related definitions.

use std::{path::PathBuf, str::FromStr as _, time};

use common::Percent;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Backend configuration.
    pub backend: Backend,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Service configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// [JWT] secret the backend signs bearer tokens with.
    ///
    /// [JWT]: https://wikipedia.org/wiki/JSON_Web_Token
    #[default("secret".to_owned())]
    pub jwt_secret: String,

    /// Directory the anonymous cart token is persisted in.
    #[default(PathBuf::from(".state"))]
    pub state_dir: PathBuf,

    /// Pricing configuration.
    pub pricing: Pricing,
}

/// Pricing configuration.
///
/// The rates mirror the promotional policy currently hard-coded on the
/// platform: 20% discount and 18% tax.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Pricing {
    /// Promotional discount rate, in percent.
    #[default("20".to_owned())]
    pub discount: String,

    /// Tax rate, in percent.
    #[default("18".to_owned())]
    pub tax: String,
}

impl TryFrom<Service> for service::Config {
    type Error = &'static str;

    fn try_from(value: Service) -> Result<Self, Self::Error> {
        let Service {
            jwt_secret,
            state_dir: _,
            pricing: Pricing { discount, tax },
        } = value;

        Ok(Self {
            identity_decoding_key: jsonwebtoken::DecodingKey::from_secret(
                jwt_secret.as_bytes(),
            ),
            pricing: service::domain::cart::pricing::Policy {
                discount: Percent::from_str(&discount)?,
                tax: Percent::from_str(&tax)?,
            },
        })
    }
}

/// Backend configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Backend {
    /// Base URL of the backend.
    #[default("http://127.0.0.1:9090/api".to_owned())]
    pub base_url: String,

    /// Service credential to attach to every backend request.
    pub bearer: Option<SecretString>,

    /// Timeout of a single backend request.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Backend> for service::infra::backend::rest::Config {
    fn from(value: Backend) -> Self {
        let Backend {
            base_url,
            bearer,
            timeout,
        } = value;

        Self {
            base_url,
            bearer,
            timeout,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Config, Service};

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();

        assert!(service::Config::try_from(config.service).is_ok());
    }

    #[test]
    fn rejects_malformed_pricing() {
        let service = Service {
            pricing: super::Pricing {
                discount: "120".to_owned(),
                tax: "18".to_owned(),
            },
            ..Service::default()
        };

        assert!(service::Config::try_from(service).is_err());
    }
}
