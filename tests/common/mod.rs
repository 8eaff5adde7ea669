use std::time::Duration;

use mozillians::Client;
use serde_json::{json, Value};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};
use wiremock::{
	matchers::{method, path, query_param},
	Mock, MockServer, ResponseTemplate,
};

pub const APP_NAME: &str = "phonebook";
pub const APP_KEY: &str = "s3cr3t";
pub const USERS_PATH: &str = "/api/v1/users/";

pub fn init_tracing() {
	let tracing_filter = EnvFilter::default().add_directive(LevelFilter::DEBUG.into());
	let _ = tracing_subscriber::fmt().with_env_filter(tracing_filter).try_init();
}

pub fn client_for(server: &MockServer) -> Client {
	Client::with_endpoint(APP_NAME, APP_KEY, format!("{}{USERS_PATH}", server.uri()))
}

pub fn envelope(total_count: u64, users: &[Value]) -> Value {
	json!({
		"meta": {"limit": 20, "next": 0, "offset": 0, "previous": 0, "total_count": total_count},
		"objects": users,
	})
}

pub fn user(username: &str, full_name: &str) -> Value {
	json!({"username": username, "photo": "", "photo_thumbnail": "", "full_name": full_name})
}

/// Answer lookups for `email` carrying the test credentials with `response`.
pub async fn mock_lookup(server: &MockServer, email: &str, response: ResponseTemplate) {
	Mock::given(method("GET"))
		.and(path(USERS_PATH))
		.and(query_param("app_name", APP_NAME))
		.and(query_param("app_key", APP_KEY))
		.and(query_param("email", email))
		.respond_with(response)
		.expect(1)
		.mount(server)
		.await;
}

/// Answer every lookup with an empty page, but only after `delay`.
pub async fn mock_slow(server: &MockServer, delay: Duration) {
	Mock::given(method("GET"))
		.and(path(USERS_PATH))
		.respond_with(ResponseTemplate::new(200).set_body_json(envelope(0, &[])).set_delay(delay))
		.mount(server)
		.await;
}
