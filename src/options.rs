//! Filters for narrowing down a user query.
use serde::{Deserialize, Serialize};

/// Separator used to join list-valued filters.
const LIST_SEPARATOR: &str = ",";

/// Optional filters for a user lookup. Empty fields are left out of the
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersOptions {
	/// Only return the user with this exact email address
	pub email: String,
	/// Only return users from this country
	pub country: String,
	/// Only return users from this region
	pub region: String,
	/// Only return users which are members of all of these groups
	pub groups: Vec<String>,
	/// Only return users which list all of these skills
	pub skills: Vec<String>,
}

impl UsersOptions {
	/// Returns the query parameters for every non-empty filter. List values
	/// are joined with commas, keeping their order.
	#[must_use]
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let scalars = [("email", &self.email), ("country", &self.country), ("region", &self.region)];
		let lists = [("groups", &self.groups), ("skills", &self.skills)];

		scalars
			.into_iter()
			.filter(|(_, value)| !value.is_empty())
			.map(|(name, value)| (name, value.clone()))
			.chain(
				lists
					.into_iter()
					.filter(|(_, values)| !values.is_empty())
					.map(|(name, values)| (name, values.join(LIST_SEPARATOR))),
			)
			.collect()
	}

	/// Returns the names of the filters that are set, without their values.
	#[must_use]
	pub fn active_filters(&self) -> Vec<&'static str> {
		self.query_pairs().into_iter().map(|(name, _)| name).collect()
	}
}
