//! Types of the JSON envelope returned by the users endpoint.
//!
//! Missing and `null` fields decode to their default value, since the server
//! sends `null` for `next` and `previous` on the first and last page.
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a value that may be `null`, falling back to its default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Pagination counters of a users page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
	/// Maximum number of users per page
	#[serde(deserialize_with = "null_as_default")]
	pub limit: u64,
	/// Offset of the next page
	#[serde(deserialize_with = "null_as_default")]
	pub next: u64,
	/// Offset of this page
	#[serde(deserialize_with = "null_as_default")]
	pub offset: u64,
	/// Offset of the previous page
	#[serde(deserialize_with = "null_as_default")]
	pub previous: u64,
	/// Number of users matching the query across all pages
	#[serde(deserialize_with = "null_as_default")]
	pub total_count: u64,
}

/// A user as returned by the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
	/// Unique username
	#[serde(deserialize_with = "null_as_default")]
	pub username: String,
	/// URL of the full size profile photo
	#[serde(deserialize_with = "null_as_default")]
	pub photo: String,
	/// URL of the profile photo thumbnail
	#[serde(deserialize_with = "null_as_default")]
	pub photo_thumbnail: String,
	/// Display name
	#[serde(deserialize_with = "null_as_default")]
	pub full_name: String,
}

/// The envelope wrapping a page of users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersResponse {
	/// Pagination counters
	#[serde(deserialize_with = "null_as_default")]
	pub meta: Meta,
	/// The users on this page
	#[serde(rename = "objects", deserialize_with = "null_as_default")]
	pub users: Vec<User>,
}
