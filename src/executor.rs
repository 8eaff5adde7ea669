//! Running requests on a background task while staying cancellable.
//!
//! [`execute`] sends a request and hands the outcome to a processing function,
//! both on a spawned task. The caller waits for either that task or the
//! cancellation token. On cancellation the task is aborted, which drops the
//! in-flight request future and with it the connection, and then joined, so
//! that everything the processing function owned (most importantly the
//! response body) is released before [`execute`] returns. The task is also
//! aborted if the future returned by [`execute`] is dropped before it
//! completes.
use std::future::Future;

use tokio_util::{sync::CancellationToken, task::AbortOnDropHandle};
use tracing::{debug, warn};

use crate::error::Error;

/// Send `request` with `http` and pass the outcome to `process`, returning
/// [`Error::Cancelled`] if `cancel` fires first.
///
/// Cancellation takes precedence: once the token is observed as cancelled the
/// result of the request is discarded, even if it was about to succeed. The
/// spawned task never outlives this function.
pub async fn execute<T, F, Fut>(
	http: &reqwest::Client,
	request: reqwest::Request,
	cancel: &CancellationToken,
	process: F,
) -> Result<T, Error>
where
	T: Send + 'static,
	F: FnOnce(Result<reqwest::Response, reqwest::Error>) -> Fut + Send + 'static,
	Fut: Future<Output = Result<T, Error>> + Send + 'static,
{
	let http = http.clone();
	let mut task =
		AbortOnDropHandle::new(tokio::spawn(async move { process(http.execute(request).await).await }));

	let joined = tokio::select! {
		biased;
		() = cancel.cancelled() => None,
		joined = &mut task => Some(joined),
	};

	match joined {
		Some(joined) => joined?,
		None => {
			task.abort();
			match task.await {
				Err(err) if err.is_panic() => warn!("Request task panicked during cancellation: {err}"),
				Err(_) => debug!("Aborted in-flight request"),
				Ok(_) => debug!("Request finished before it could be aborted, discarding result"),
			}
			Err(Error::Cancelled)
		}
	}
}
