//! Client-level error types shared by the token lifecycle, dispatcher, and decoders.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Body decoding failure after a successful response.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Upstream answered with a status outside 200/201.
	#[error("request error ({status}): {body}")]
	Rejected {
		/// HTTP status returned by the server.
		status: StatusCode,
		/// Response body read as plain text.
		body: String,
	},
	/// Upstream answered with a failure status and the body could not be read.
	#[error("request error ({status}). unable to retrieve plain text response")]
	BodyRead {
		/// HTTP status returned by the server.
		status: StatusCode,
		/// Underlying read failure.
		#[source]
		source: ReqwestError,
	},
	/// Stored bearer token expiration is not RFC3339.
	#[error("error parsing the bearer token expiration date: {raw}")]
	InvalidExpiry {
		/// Raw expiration text as stored.
		raw: String,
		/// Underlying parsing failure.
		#[source]
		source: time::error::Parse,
	},
	/// Token endpoint succeeded but its body is not a valid token document.
	#[error("response was successful but an error occurred decoding the JSON token response")]
	TokenResponseParse {
		/// HTTP status returned by the token endpoint.
		status: StatusCode,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Response declared a media type none of the decoders understand.
	#[error("response was successful but received unexpected response body of type {media_type:?}")]
	UnsupportedFormat {
		/// Base media type taken from the `Content-Type` header.
		media_type: String,
	},
	/// Response decoded but did not contain the expected record.
	#[error("response was successful but did not contain a {resource} record")]
	MissingRecord {
		/// Resource label that was expected.
		resource: &'static str,
	},
	/// Error annotated with the operation that was being attempted.
	#[error("{context}: {source}")]
	Context {
		/// What was being attempted, and against which endpoint.
		context: String,
		/// Wrapped failure.
		#[source]
		source: Box<Error>,
	},
}
impl Error {
	/// Wraps the error with an operation description.
	pub fn context(self, context: impl Into<String>) -> Self {
		Self::Context { context: context.into(), source: Box::new(self) }
	}

	/// Returns the innermost error beneath any [`Error::Context`] layers.
	pub fn root(&self) -> &Error {
		let mut current = self;

		while let Self::Context { source, .. } = current {
			current = source;
		}

		current
	}
}

/// Adds [`Error::Context`] layers to fallible results.
pub trait ResultExt<T> {
	/// Wraps the error, if any, with the lazily built context message.
	fn context<C, F>(self, f: F) -> Result<T>
	where
		C: Into<String>,
		F: FnOnce() -> C;
}
impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
	E: Into<Error>,
{
	fn context<C, F>(self, f: F) -> Result<T>
	where
		C: Into<String>,
		F: FnOnce() -> C,
	{
		self.map_err(|e| e.into().context(f()))
	}
}

/// Configuration and validation failures raised before any network call.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Domain, username, or password is empty.
	#[error("you must provide a valid Jamf domain, username, and password")]
	MissingCredentials,
	/// Domain cannot be parsed as an absolute URL.
	#[error("Jamf domain is not a valid URL: {domain}")]
	InvalidDomain {
		/// Domain as supplied by the caller.
		domain: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Resource endpoint cannot be built.
	#[error("unable to build resource endpoint: {reason}")]
	InvalidEndpoint {
		/// What made the endpoint invalid.
		reason: String,
	},
	/// Outbound request cannot be assembled.
	#[error("error creating request to {url}")]
	RequestBuild {
		/// Target URL of the request.
		url: String,
		/// Underlying builder failure.
		#[source]
		source: ReqwestError,
	},
	/// Header value contains characters HTTP does not allow.
	#[error("invalid value for the {name} header")]
	InvalidHeader {
		/// Header that could not be set.
		name: &'static str,
		/// Underlying validation failure.
		#[source]
		source: reqwest::header::InvalidHeaderValue,
	},
	/// Expiration instant cannot be rendered as RFC3339.
	#[error("expiration {instant} cannot be rendered as RFC3339")]
	ExpiryFormat {
		/// Instant that failed to format.
		instant: OffsetDateTime,
		/// Underlying formatting failure.
		#[source]
		source: time::error::Format,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("error making {method} request to {url}")]
	Network {
		/// HTTP method of the failed request.
		method: Method,
		/// Target URL of the failed request.
		url: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error raised for `method url`.
	pub fn network(
		method: Method,
		url: impl Display,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Network { method, url: url.to_string(), source: Box::new(src) }
	}
}

/// Body decoding failures; each variant names the media type involved.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// JSON body could not be decoded.
	#[error("response was successful but failed to decode response body of type {media_type}")]
	Json {
		/// Base media type the body was declared as.
		media_type: String,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// XML body could not be decoded.
	#[error("response was successful but failed to decode response body of type {media_type}")]
	Markup {
		/// Base media type the body was declared as.
		media_type: String,
		/// Underlying XML deserializer failure.
		#[source]
		source: quick_xml::DeError,
	},
}
impl DecodeError {
	/// Returns the media type the failing body was declared as.
	pub fn media_type(&self) -> &str {
		match self {
			Self::Json { media_type, .. } | Self::Markup { media_type, .. } => media_type,
		}
	}
}
