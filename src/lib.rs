//! Look up users in the [Mozillians] community directory.
//!
//! The library wraps the single users endpoint of the Mozillians API. Every
//! call to [`Client::users`] sends exactly one authenticated GET request with
//! the requested filters and returns the page of users the server answered
//! with, together with its pagination counters. Following further pages is up
//! to the caller.
//!
//! Requests are cancellable. Each call takes a [`CancellationToken`]; if the
//! token is cancelled while the request is in flight, the connection is
//! aborted and the call returns [`Error::Cancelled`]. Deadlines can be built on
//! top of this by cancelling the token from a timer.
//!
//! [Mozillians]: https://mozillians.org
//!
//! # Getting started
//! A minimal lookup might look like so:
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use mozillians::{CancellationToken, Client, Config, UsersOptions};
//!
//! // Reads MOZILLIANS_APP_NAME and MOZILLIANS_APP_KEY. Configuration can also
//! // be deserialized with serde.
//! let client = Client::from_config(Config::from_env()?)?;
//!
//! let cancel = CancellationToken::new();
//! let options = UsersOptions {
//!     groups: vec!["webdev".to_owned(), "rust".to_owned()],
//!     ..UsersOptions::default()
//! };
//!
//! let (users, meta) = client.users(&cancel, &options).await?;
//! println!("Showing {} of {} users", users.len(), meta.total_count);
//! for user in users {
//!     println!("{}: {}", user.username, user.full_name);
//! }
//!
//! # Ok(())
//! # }
//! ```
//!
//! # Limitations
//! * Responses with a non-2xx status are reported as [`Error::Status`]; the
//!   error body the server may have sent is discarded.
//! * Requests are never retried.

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod options;
pub mod response;

pub use tokio_util::sync::CancellationToken;

pub use crate::{
	client::Client,
	config::{Config, ConnectionConfig},
	error::Error,
	options::UsersOptions,
	response::{Meta, User, UsersResponse},
};
