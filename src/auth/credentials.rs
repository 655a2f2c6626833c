//! Basic-auth credentials exchanged for bearer tokens.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Username/password pair presented to the token endpoint.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Jamf account name.
	pub username: String,
	/// Jamf account password.
	pub password: Secret,
}
impl Credentials {
	/// Builds credentials, rejecting empty fields.
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
		let username = username.into();
		let password = Secret::new(password);

		if username.is_empty() || password.is_empty() {
			return Err(ConfigError::MissingCredentials.into());
		}

		Ok(Self { username, password })
	}
}
