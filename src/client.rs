//! Authenticated Jamf classic API client.
//!
//! The client owns its configuration, the current bearer token, and the singleflight guard that
//! serializes renewals. Individual pipeline stages live in submodules that each extend
//! [`Client`]:
//!
//! - [`acquire`] exchanges Basic credentials for a bearer token.
//! - [`guard`] decides whether the cached token is still usable.
//! - [`dispatch`] decorates, executes, classifies, and decodes authenticated requests.

pub mod acquire;
pub mod dispatch;
pub mod guard;

pub use dispatch::decorate;

// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	config::{ClientConfig, ClientConfigBuilder},
	http::ReqwestHttpClient,
	store::TokenStore,
};

/// Client bound to a single Jamf instance and account.
///
/// Share it behind an [`Arc`] for concurrent use; concurrent callers that find the token stale
/// wait on one renewal instead of each contacting the token endpoint.
pub struct Client {
	config: ClientConfig,
	store: TokenStore,
	renewal: AsyncMutex<()>,
}
impl Client {
	/// Creates a client for `domain` using the provided credentials.
	///
	/// Uses a default transport with a one-minute timeout when `http_client` is `None`. Fails
	/// without touching the network if any argument is empty.
	pub fn new(
		domain: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
		http_client: Option<ReqwestHttpClient>,
	) -> Result<Self> {
		let mut builder = ClientConfig::builder(domain, username, password);

		if let Some(http_client) = http_client {
			builder = builder.http_client(http_client);
		}

		builder.build().map(Self::from_config)
	}

	/// Returns a configuration builder whose [`ClientConfigBuilder::build`] output feeds
	/// [`Client::from_config`].
	pub fn builder(
		domain: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> ClientConfigBuilder {
		ClientConfig::builder(domain, username, password)
	}

	/// Creates a client from an already validated configuration.
	pub fn from_config(config: ClientConfig) -> Self {
		Self { config, store: TokenStore::default(), renewal: AsyncMutex::new(()) }
	}

	/// Seeds the token store, e.g. with a token persisted by the caller.
	pub fn with_token(self, token: BearerToken) -> Self {
		self.store.replace(token);

		self
	}

	/// Returns the immutable configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Returns the classic API base, `{domain}/JSSResource`.
	pub fn endpoint(&self) -> &str {
		&self.config.endpoint
	}

	/// Returns a copy of the currently cached token.
	pub fn token(&self) -> BearerToken {
		self.store.snapshot()
	}

	/// Returns the token store backing this client.
	pub fn token_store(&self) -> &TokenStore {
		&self.store
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("endpoint", &self.config.endpoint)
			.field("username", &self.config.credentials.username)
			.field("token_set", &!self.store.snapshot().expires.is_empty())
			.finish()
	}
}
