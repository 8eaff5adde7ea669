//! Error codes

/// Errors that can occur when using this library
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// The outgoing request could not be constructed, usually because the
	/// configured endpoint is not a valid URL.
	#[error("Could not build request: {0}")]
	Request(#[from] url::ParseError),
	/// A transport-level failure occurred while sending the request or
	/// reading the response body.
	#[error("Network error: {0}")]
	Network(#[source] reqwest::Error),
	/// The server answered with a status code outside of the 2xx range.
	#[error("Unexpected HTTP status {0}")]
	Status(reqwest::StatusCode),
	/// The response body was not a valid users envelope.
	#[error("Malformed response: {0}")]
	Decode(#[from] serde_json::Error),
	/// The cancellation token fired before the request completed.
	#[error("Request cancelled")]
	Cancelled,
	/// The background task running the request panicked.
	#[error("Request task failed: {0}")]
	Task(#[from] tokio::task::JoinError),
	/// The configuration could not be used to build a client.
	#[error("Invalid configuration: {0}")]
	Invalid(String),
}

impl Error {
	/// Whether this error was caused by the caller cancelling the request.
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Error::Cancelled)
	}
}
