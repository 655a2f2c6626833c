//! Content-type driven decoding of successful response bodies.
//!
//! Jamf serves JSON from some classic endpoints and XML from others, and occasionally labels
//! JSON as `text/plain`, so the strategy is picked per response from its `Content-Type`.

// self
use crate::{_prelude::*, error::DecodeError};

/// Decoding strategy selected from a response `Content-Type`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyFormat {
	/// `text/json`, `application/json`, or `text/plain`.
	Json,
	/// `text/xml` or `application/xml`.
	Markup,
	/// Any other media type, kept for diagnostics.
	Unsupported(String),
}
impl BodyFormat {
	/// Classifies a raw `Content-Type` header value, ignoring parameters such as `charset`.
	pub fn from_content_type(content_type: &str) -> Self {
		let media_type = media_type(content_type);

		match media_type.as_str() {
			"text/xml" | "application/xml" => Self::Markup,
			"text/json" | "application/json" | "text/plain" => Self::Json,
			_ => Self::Unsupported(media_type),
		}
	}
}

/// Extracts the lowercase base media type from a `Content-Type` header value.
pub fn media_type(content_type: &str) -> String {
	content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}

/// Decodes `body` according to the declared `content_type`.
pub fn decode<T>(body: &[u8], content_type: &str) -> Result<T>
where
	T: DeserializeOwned,
{
	match BodyFormat::from_content_type(content_type) {
		BodyFormat::Json => decode_json(body, media_type(content_type)),
		BodyFormat::Markup => decode_markup(body, media_type(content_type)),
		BodyFormat::Unsupported(media_type) => Err(Error::UnsupportedFormat { media_type }),
	}
}

/// Decodes `body` from the response's own `Content-Type` header.
///
/// Non-ASCII header bytes are kept lossily so unsupported types still report what was sent.
pub fn decode_response_body<T>(body: &[u8], headers: &reqwest::header::HeaderMap) -> Result<T>
where
	T: DeserializeOwned,
{
	let content_type = headers
		.get(reqwest::header::CONTENT_TYPE)
		.map(|value| String::from_utf8_lossy(value.as_bytes()))
		.unwrap_or_default();

	decode(body, &content_type)
}

fn decode_json<T>(body: &[u8], media_type: String) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de)
		.map_err(|source| DecodeError::Json { media_type, source }.into())
}

fn decode_markup<T>(body: &[u8], media_type: String) -> Result<T>
where
	T: DeserializeOwned,
{
	quick_xml::de::from_reader(body)
		.map_err(|source| DecodeError::Markup { media_type, source }.into())
}
