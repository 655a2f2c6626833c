//! Authenticated request execution: decoration, status classification, and decoding.

// crates.io
use reqwest::{
	IntoUrl,
	header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, HeaderValue, STRICT_TRANSPORT_SECURITY},
};
// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	client::Client,
	decode,
	error::{ConfigError, ResultExt, TransportError},
	http,
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Prefers JSON (q=1.0) but accepts XML (q=0.9); some endpoints only speak XML.
pub const ACCEPT_VALUE: &str = "application/json, application/xml;q=0.9";
/// Forbids every cache between the client and Jamf from keeping device data.
pub const CACHE_CONTROL_VALUE: &str =
	"no-store, no-cache, must-revalidate, max-age=0, post-check=0, pre-check=0";
/// Transport-security hint sent with every authenticated request.
pub const STRICT_TRANSPORT_SECURITY_VALUE: &str = "max-age=31536000 ; includeSubDomains";

/// Sets the negotiation, cache, transport-security, and bearer headers on `request`.
///
/// Existing values for those headers are replaced.
pub fn decorate(mut request: Request, token: &BearerToken) -> Result<Request> {
	let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token.token.expose()))
		.map_err(|source| ConfigError::InvalidHeader { name: "authorization", source })?;

	authorization.set_sensitive(true);

	let headers = request.headers_mut();

	headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
	headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE));
	headers.insert(
		STRICT_TRANSPORT_SECURITY,
		HeaderValue::from_static(STRICT_TRANSPORT_SECURITY_VALUE),
	);
	headers.insert(AUTHORIZATION, authorization);

	Ok(request)
}

impl Client {
	/// Executes `request` with a valid bearer token and decodes the body into `T`.
	///
	/// The body is decoded as JSON or XML depending on the response `Content-Type`. Statuses
	/// other than 200/201 fail with the response text; nothing is retried.
	pub async fn execute_authenticated<T>(&self, request: Request) -> Result<T>
	where
		T: DeserializeOwned,
	{
		const KIND: CallKind = CallKind::Resource;

		let span = CallSpan::new(KIND, "execute_authenticated");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let token = self
					.ensure_valid_token()
					.await
					.context(|| "error checking for bearer token expiration")?;
				let request = decorate(request, &token)?;
				let method = request.method().clone();
				let url = request.url().clone();
				let response = self.config.http_client.execute(request).await?;
				let response = http::accept(response).await?;
				let headers = response.headers().clone();
				let body =
					response.bytes().await.map_err(|e| TransportError::network(method, url, e))?;

				decode::decode_response_body(&body, &headers)
			})
			.await;

		obs::record_call_outcome(KIND, CallOutcome::of(&result));

		result
	}

	/// Like [`Client::execute_authenticated`], but writes into `target`.
	///
	/// `target` is only overwritten once the whole call has succeeded.
	pub async fn execute_authenticated_into<T>(
		&self,
		request: Request,
		target: &mut T,
	) -> Result<()>
	where
		T: DeserializeOwned,
	{
		*target = self.execute_authenticated(request).await?;

		Ok(())
	}

	/// Issues an authenticated `GET` against `url`.
	pub async fn get<T, U>(&self, url: U) -> Result<T>
	where
		T: DeserializeOwned,
		U: IntoUrl + Display,
	{
		let target = url.to_string();
		let request = self
			.config
			.http_client
			.get(url)
			.build()
			.map_err(|source| ConfigError::RequestBuild { url: target, source })?;

		self.execute_authenticated(request).await
	}
}
