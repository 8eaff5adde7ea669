//! Config for the Mozillians client.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The users endpoint of the public Mozillians API.
pub const DEFAULT_ENDPOINT: &str = "https://mozillians.org/api/v1/users/";

/// Environment variable holding the application name.
pub const APP_NAME_VAR: &str = "MOZILLIANS_APP_NAME";
/// Environment variable holding the application key.
pub const APP_KEY_VAR: &str = "MOZILLIANS_APP_KEY";
/// Environment variable which, if set, overrides [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_VAR: &str = "MOZILLIANS_ENDPOINT";

/// Mozillians API configuration.
#[derive(Deserialize, Serialize, Clone)]
pub struct Config {
	/// The URL of the users endpoint. Kept as a string so that a malformed
	/// value is reported when a request is built.
	#[serde(default = "default_endpoint")]
	pub endpoint: String,
	/// The application name issued by the directory administrators
	pub app_name: String,
	/// The application key belonging to `app_name`
	pub app_key: String,
	/// Connection settings.
	#[serde(default)]
	pub connection: ConnectionConfig,
}

/// Configuration for how to connect to the API server
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectionConfig {
	/// Timeout to establish a connection in seconds.
	#[serde(default = "default_timeout")]
	pub timeout: u64,

	/// User agent sent with every request. Uses the transport's default if
	/// unset.
	#[serde(default)]
	pub user_agent: Option<String>,
}

impl Default for ConnectionConfig {
	fn default() -> Self {
		Self { timeout: default_timeout(), user_agent: None }
	}
}

/// Serde default for [`ConnectionConfig::timeout`]
fn default_timeout() -> u64 {
	5
}

impl std::fmt::Debug for Config {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Config")
			.field("endpoint", &self.endpoint)
			.field("app_name", &self.app_name)
			.field("app_key", &"[redacted]")
			.field("connection", &self.connection)
			.finish()
	}
}

/// Serde default for [`Config::endpoint`]
fn default_endpoint() -> String {
	DEFAULT_ENDPOINT.to_owned()
}

impl Config {
	/// Create a configuration for the public endpoint with default connection
	/// settings.
	#[must_use]
	pub fn new(app_name: impl Into<String>, app_key: impl Into<String>) -> Self {
		Self {
			endpoint: default_endpoint(),
			app_name: app_name.into(),
			app_key: app_key.into(),
			connection: ConnectionConfig::default(),
		}
	}

	/// Read the credentials from [`APP_NAME_VAR`] and [`APP_KEY_VAR`], and
	/// optionally the endpoint from [`ENDPOINT_VAR`].
	pub fn from_env() -> Result<Self, Error> {
		let mut config = Self::new(require_var(APP_NAME_VAR)?, require_var(APP_KEY_VAR)?);
		if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
			config.endpoint = endpoint;
		}
		Ok(config)
	}
}

/// Read an environment variable that has to be present.
fn require_var(name: &str) -> Result<String, Error> {
	std::env::var(name)
		.map_err(|err| Error::Invalid(format!("Could not read environment variable {name}: {err}")))
}

impl ConnectionConfig {
	/// Create a [`reqwest::Client`] based on this [`ConnectionConfig`]
	pub(crate) fn to_http_client(&self) -> Result<reqwest::Client, Error> {
		let mut builder =
			reqwest::Client::builder().connect_timeout(Duration::from_secs(self.timeout));

		if let Some(user_agent) = &self.user_agent {
			builder = builder.user_agent(user_agent.as_str());
		}

		builder
			.build()
			.map_err(|err| Error::Invalid(format!("Could not build HTTP client: {err}")))
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used, clippy::expect_used, clippy::items_after_statements)]

	use serial_test::serial;

	use super::{Config, APP_KEY_VAR, APP_NAME_VAR, DEFAULT_ENDPOINT, ENDPOINT_VAR};
	use crate::{error, ConnectionConfig};

	#[test]
	fn test_deserialize_defaults() -> Result<(), Box<dyn std::error::Error>> {
		let config: Config =
			serde_json::from_str(r#"{"app_name": "phonebook", "app_key": "s3cr3t"}"#)?;

		assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
		assert_eq!(config.app_name, "phonebook");
		assert_eq!(config.connection.timeout, 5);
		assert!(config.connection.user_agent.is_none());

		Ok(())
	}

	#[test]
	fn test_deserialize_partial_connection() -> Result<(), Box<dyn std::error::Error>> {
		let config: Config = serde_json::from_str(
			r#"{"app_name": "phonebook", "app_key": "s3cr3t", "connection": {"user_agent": "phonebook/1.0"}}"#,
		)?;

		assert_eq!(config.connection.timeout, 5);
		assert_eq!(config.connection.user_agent.as_deref(), Some("phonebook/1.0"));

		Ok(())
	}

	#[test]
	fn test_debug_hides_key() {
		let config = Config::new("phonebook", "s3cr3t");

		let debug = format!("{config:?}");
		assert!(debug.contains("phonebook"));
		assert!(!debug.contains("s3cr3t"), "The application key must not be printed");
	}

	#[test]
	fn test_http_client() -> Result<(), Box<dyn std::error::Error>> {
		ConnectionConfig { timeout: 1, user_agent: Some("phonebook/1.0".to_owned()) }
			.to_http_client()?;

		assert!(matches!(
			ConnectionConfig { timeout: 1, user_agent: Some("bad\nagent".to_owned()) }
				.to_http_client()
				.err()
				.unwrap(),
			error::Error::Invalid(_)
		));

		Ok(())
	}

	#[test]
	#[serial]
	fn test_from_env() -> Result<(), Box<dyn std::error::Error>> {
		std::env::set_var(APP_NAME_VAR, "phonebook");
		std::env::set_var(APP_KEY_VAR, "s3cr3t");
		std::env::remove_var(ENDPOINT_VAR);

		let config = Config::from_env()?;
		assert_eq!(config.app_name, "phonebook");
		assert_eq!(config.app_key, "s3cr3t");
		assert_eq!(config.endpoint, DEFAULT_ENDPOINT);

		std::env::set_var(ENDPOINT_VAR, "http://localhost:8000/api/v1/users/");
		assert_eq!(Config::from_env()?.endpoint, "http://localhost:8000/api/v1/users/");
		std::env::remove_var(ENDPOINT_VAR);

		std::env::remove_var(APP_KEY_VAR);
		assert!(matches!(Config::from_env().err().unwrap(), error::Error::Invalid(_)));

		std::env::remove_var(APP_NAME_VAR);
		Ok(())
	}
}
