//! Bearer-token acquisition via HTTP Basic credentials.

// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	client::Client,
	error::{ConfigError, TransportError},
	http,
	obs::{self, CallKind, CallOutcome, CallSpan},
};

impl Client {
	/// Exchanges the configured credentials for a new bearer token and stores it.
	///
	/// Issues `POST {domain}/api/v1/auth/token` with Basic auth and an empty body. Only 200/201
	/// count as success; the stored token is left untouched on any failure.
	pub async fn acquire_token(&self) -> Result<BearerToken> {
		const KIND: CallKind = CallKind::TokenAcquire;

		let span = CallSpan::new(KIND, "acquire_token");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let endpoint = &self.config.token_endpoint;
				let credentials = &self.config.credentials;
				let request = self
					.config
					.http_client
					.post(endpoint)
					.basic_auth(&credentials.username, Some(credentials.password.expose()))
					.build()
					.map_err(|source| ConfigError::RequestBuild { url: endpoint.clone(), source })?;
				let response = http::accept(self.config.http_client.execute(request).await?).await?;
				let status = response.status();
				let body = response
					.bytes()
					.await
					.map_err(|e| TransportError::network(Method::POST, endpoint, e))?;
				let mut de = serde_json::Deserializer::from_slice(&body);
				let token: BearerToken = serde_path_to_error::deserialize(&mut de)
					.map_err(|source| Error::TokenResponseParse { status, source })?;

				self.store.replace(token.clone());

				Ok(token)
			})
			.await;

		obs::record_call_outcome(KIND, CallOutcome::of(&result));

		result
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use base64::{Engine, engine::general_purpose::STANDARD};
	use httpmock::prelude::*;
	// self
	use super::*;

	fn client(server: &MockServer) -> Client {
		Client::new(server.base_url(), "fake-username", "mock-password-cool", None)
			.expect("Client should build against the mock server.")
	}

	#[tokio::test]
	async fn acquire_sends_basic_auth_and_stores_token() {
		let server = MockServer::start_async().await;
		let basic = STANDARD.encode("fake-username:mock-password-cool");
		let mock = server
			.mock_async(|when, then| {
				when.method(POST)
					.path("/api/v1/auth/token")
					.header("authorization", format!("Basic {basic}"));
				then.status(200)
					.header("content-type", "application/json")
					.body(r#"{"token":"fresh-token","expires":"2030-01-01T00:00:00.000Z"}"#);
			})
			.await;
		let client = client(&server);
		let token = client.acquire_token().await.expect("Token exchange should succeed.");

		assert_eq!(token.token.expose(), "fresh-token");
		assert_eq!(client.token().token.expose(), "fresh-token");
		assert_eq!(client.token().expires, "2030-01-01T00:00:00.000Z");

		mock.assert_async().await;
	}

	#[tokio::test]
	async fn created_status_is_accepted() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(POST).path("/api/v1/auth/token");
				then.status(201).body(r#"{"token":"T","expires":"2030-01-01T00:00:00Z"}"#);
			})
			.await;
		let client = client(&server);

		client.acquire_token().await.expect("201 should be accepted.");

		assert_eq!(client.token().token.expose(), "T");

		mock.assert_async().await;
	}

	#[tokio::test]
	async fn rejection_surfaces_plain_text_body() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(POST).path("/api/v1/auth/token");
				then.status(401).body("Unauthorized: bad credentials");
			})
			.await;
		let client = client(&server);
		let err = client.acquire_token().await.expect_err("401 must be rejected.");

		match err {
			Error::Rejected { status, body } => {
				assert_eq!(status, StatusCode::UNAUTHORIZED);
				assert_eq!(body, "Unauthorized: bad credentials");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}

		assert_eq!(client.token(), BearerToken::default());

		mock.assert_async().await;
	}

	#[tokio::test]
	async fn malformed_token_body_is_a_parse_error() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(POST).path("/api/v1/auth/token");
				then.status(200).body(r#"{"token":"T"}"#);
			})
			.await;
		let client = client(&server);
		let err = client.acquire_token().await.expect_err("Missing expires must fail.");

		assert!(matches!(
			err,
			Error::TokenResponseParse { status, .. } if status == StatusCode::OK
		));
		assert_eq!(client.token(), BearerToken::default());

		mock.assert_async().await;
	}
}
