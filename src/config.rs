//! Immutable client configuration and its validating builder.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret},
	error::ConfigError,
	http::ReqwestHttpClient,
};

/// Path segment under which every classic API resource lives.
pub const RESOURCE_PATH: &str = "JSSResource";
/// Path of the bearer-token exchange, relative to the domain.
pub const TOKEN_PATH: &str = "api/v1/auth/token";

/// Resolved endpoints, transport, and credentials for one Jamf instance.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Jamf domain (scheme + host, no trailing slash).
	pub domain: String,
	/// Classic API base, `{domain}/JSSResource`.
	pub endpoint: String,
	/// Token exchange endpoint, `{domain}/api/v1/auth/token`.
	pub token_endpoint: String,
	/// Credentials presented to the token endpoint.
	pub credentials: Credentials,
	/// Transport shared by token and resource calls.
	pub http_client: ReqwestHttpClient,
}
impl ClientConfig {
	/// Returns a builder seeded with the required fields.
	pub fn builder(
		domain: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> ClientConfigBuilder {
		ClientConfigBuilder::new(domain, username, password)
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Jamf domain as supplied by the caller.
	pub domain: String,
	/// Account name.
	pub username: String,
	/// Account password, redacted from `Debug` output.
	pub password: Secret,
	/// Optional caller-supplied transport.
	pub http_client: Option<ReqwestHttpClient>,
}
impl ClientConfigBuilder {
	/// Creates a new builder for the provided domain and credentials.
	pub fn new(
		domain: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		Self {
			domain: domain.into(),
			username: username.into(),
			password: Secret::new(password),
			http_client: None,
		}
	}

	/// Uses a caller-supplied transport instead of the one-minute default.
	pub fn http_client(mut self, http_client: impl Into<ReqwestHttpClient>) -> Self {
		self.http_client = Some(http_client.into());

		self
	}

	/// Validates inputs and resolves endpoints.
	///
	/// Fails with [`ConfigError::MissingCredentials`] before anything else when a field is empty.
	pub fn build(self) -> Result<ClientConfig> {
		if self.domain.is_empty() {
			return Err(ConfigError::MissingCredentials.into());
		}

		let credentials = Credentials::new(self.username, self.password.expose())?;
		let domain = self.domain.trim_end_matches('/').to_owned();

		Url::parse(&domain)
			.map_err(|source| ConfigError::InvalidDomain { domain: self.domain.clone(), source })?;

		let http_client = match self.http_client {
			Some(client) => client,
			None => ReqwestHttpClient::new()?,
		};

		Ok(ClientConfig {
			endpoint: format!("{domain}/{RESOURCE_PATH}"),
			token_endpoint: format!("{domain}/{TOKEN_PATH}"),
			domain,
			credentials,
			http_client,
		})
	}
}
