//! Shared reqwest transport and response classification.
//!
//! Both the token exchange and authenticated resource calls execute through
//! [`ReqwestHttpClient::execute`], which labels network failures with the method + URL, and
//! [`accept`], which only lets HTTP 200/201 through.

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
};

/// Request timeout applied when the caller does not supply a transport.
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Builds the default transport with a one-minute request timeout.
	pub fn new() -> Result<Self> {
		let client =
			ReqwestClient::builder().timeout(DEFAULT_TIMEOUT).build().map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Executes `request`, mapping network failures to [`TransportError::Network`].
	pub async fn execute(&self, request: Request) -> Result<Response> {
		let method = request.method().clone();
		let url = request.url().clone();

		self.0.execute(request).await.map_err(|e| TransportError::network(method, url, e).into())
	}
}
impl From<ReqwestClient> for ReqwestHttpClient {
	fn from(client: ReqwestClient) -> Self {
		Self::with_client(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Returns `true` for the only statuses the Jamf API uses to signal success.
pub fn is_accepted(status: StatusCode) -> bool {
	matches!(status, StatusCode::OK | StatusCode::CREATED)
}

/// Passes accepted responses through; otherwise reads the body as text for the error.
pub async fn accept(response: Response) -> Result<Response> {
	let status = response.status();

	if is_accepted(status) {
		return Ok(response);
	}

	match response.text().await {
		Ok(body) => Err(Error::Rejected { status, body }),
		Err(source) => Err(Error::BodyRead { status, source }),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use httpmock::prelude::*;
	use tokio::{
		io::{AsyncReadExt, AsyncWriteExt},
		net::TcpListener,
	};
	// self
	use super::*;
	use reqwest::Method;

	#[test]
	fn only_ok_and_created_are_accepted() {
		assert!(is_accepted(StatusCode::OK));
		assert!(is_accepted(StatusCode::CREATED));
		assert!(!is_accepted(StatusCode::NO_CONTENT));
		assert!(!is_accepted(StatusCode::NOT_MODIFIED));
		assert!(!is_accepted(StatusCode::UNAUTHORIZED));
	}

	#[tokio::test]
	async fn rejected_responses_carry_plain_text_body() {
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/broken");
				then.status(503).body("maintenance window");
			})
			.await;
		let http = ReqwestHttpClient::new().expect("Default transport should build.");
		let request = http.get(server.url("/broken")).build().expect("Request should build.");
		let response = http.execute(request).await.expect("Mock server should answer.");
		let err = accept(response).await.expect_err("503 must be rejected.");

		match err {
			Error::Rejected { status, body } => {
				assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
				assert_eq!(body, "maintenance window");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}

		mock.assert_async().await;
	}

	#[tokio::test]
	async fn network_failures_name_method_and_url() {
		let http = ReqwestHttpClient::new().expect("Default transport should build.");
		let request = http
			.post("http://127.0.0.1:9/api/v1/auth/token")
			.build()
			.expect("Request should build.");
		let err = http.execute(request).await.expect_err("Nothing listens on the discard port.");

		match err {
			Error::Transport(TransportError::Network { method, url, .. }) => {
				assert_eq!(method, Method::POST);
				assert_eq!(url, "http://127.0.0.1:9/api/v1/auth/token");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[tokio::test]
	async fn truncated_failure_body_is_a_body_read_error() {
		let listener =
			TcpListener::bind("127.0.0.1:0").await.expect("Loopback listener should bind.");
		let addr = listener.local_addr().expect("Listener should expose its address.");
		let server = tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await.expect("Client should connect.");
			let mut request = Vec::new();
			let mut buf = [0_u8; 1024];

			while !request.windows(4).any(|w| w == b"\r\n\r\n") {
				let n = socket.read(&mut buf).await.expect("Request should be readable.");

				if n == 0 {
					break;
				}

				request.extend_from_slice(&buf[..n]);
			}

			socket
				.write_all(
					b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial",
				)
				.await
				.expect("Truncated response should be written.");
		});
		let http = ReqwestHttpClient::new().expect("Default transport should build.");
		let request =
			http.get(format!("http://{addr}/broken")).build().expect("Request should build.");
		let response = http.execute(request).await.expect("Status line should arrive.");
		let err = accept(response).await.expect_err("500 must be rejected.");

		match &err {
			Error::BodyRead { status, .. } => {
				assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
		assert!(err.to_string().contains("unable to retrieve plain text response"));

		server.await.expect("Listener task should finish.");
	}
}
