//! Client for looking up users in the Mozillians directory

use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::{
	config::{Config, DEFAULT_ENDPOINT},
	error::Error,
	executor,
	options::UsersOptions,
	response::{Meta, User, UsersResponse},
};

/// Holds the application credentials and provides the user lookup.
#[derive(Clone)]
pub struct Client {
	/// Application name sent as `app_name`
	app: String,
	/// Application key sent as `app_key`
	key: String,
	/// URL of the users endpoint, parsed when a request is built
	endpoint: String,
	/// Transport shared by all requests of this client
	http: reqwest::Client,
}

impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Client")
			.field("app", &self.app)
			.field("key", &"[redacted]")
			.field("endpoint", &self.endpoint)
			.finish_non_exhaustive()
	}
}

impl Client {
	/// Create a client for the public Mozillians API.
	#[must_use]
	pub fn new(app: impl Into<String>, key: impl Into<String>) -> Self {
		Self::with_endpoint(app, key, DEFAULT_ENDPOINT)
	}

	/// Create a client for a different users endpoint. The endpoint is not
	/// validated until a request is made.
	#[must_use]
	pub fn with_endpoint(
		app: impl Into<String>,
		key: impl Into<String>,
		endpoint: impl Into<String>,
	) -> Self {
		Self {
			app: app.into(),
			key: key.into(),
			endpoint: endpoint.into(),
			http: reqwest::Client::new(),
		}
	}

	/// Create a client from the given configuration, building the transport
	/// from its connection settings.
	pub fn from_config(config: Config) -> Result<Self, Error> {
		let http = config.connection.to_http_client()?;
		Ok(Self { app: config.app_name, key: config.app_key, endpoint: config.endpoint, http })
	}

	/// Build the GET request for a user lookup without sending it.
	pub fn users_request(&self, options: &UsersOptions) -> Result<reqwest::Request, Error> {
		let mut url = Url::parse(&self.endpoint)?;
		url.query_pairs_mut()
			.append_pair("app_name", &self.app)
			.append_pair("app_key", &self.key)
			.extend_pairs(options.query_pairs());
		Ok(reqwest::Request::new(reqwest::Method::GET, url))
	}

	/// Look up the users matching `options`, returning one page of results
	/// together with its pagination counters.
	///
	/// If `cancel` is cancelled before the response has been processed, the
	/// connection is aborted and [`Error::Cancelled`] is returned.
	pub async fn users(
		&self,
		cancel: &CancellationToken,
		options: &UsersOptions,
	) -> Result<(Vec<User>, Meta), Error> {
		let request = self.users_request(options)?;
		debug!(endpoint = %self.endpoint, filters = ?options.active_filters(), "Looking up users");

		let page = executor::execute(&self.http, request, cancel, |response| async move {
			let response = response.map_err(Error::Network)?;
			let status = response.status();
			if !status.is_success() {
				return Err(Error::Status(status));
			}
			let body = response.bytes().await.map_err(Error::Network)?;
			Ok(serde_json::from_slice::<UsersResponse>(&body)?)
		})
		.await?;

		debug!("Received {} of {} users", page.users.len(), page.meta.total_count);
		Ok((page.users, page.meta))
	}
}
