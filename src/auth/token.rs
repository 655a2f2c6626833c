//! Bearer token issued by the Jamf authentication endpoint.

// crates.io
use time::format_description::well_known::Rfc3339;
// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Tokens expiring within this window are renewed before use.
pub const RENEWAL_MARGIN: Duration = Duration::minutes(5);

/// Bearer token plus its RFC3339 expiration, exactly as returned by `/api/v1/auth/token`.
///
/// An empty `expires` means no token has been acquired yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerToken {
	/// Token presented in the `Authorization` header.
	pub token: Secret,
	/// Expiration instant as RFC3339 text.
	pub expires: String,
}
impl BearerToken {
	/// Builds a token from its wire representation.
	pub fn new(token: impl Into<String>, expires: impl Into<String>) -> Self {
		Self { token: Secret::new(token), expires: expires.into() }
	}

	/// Builds a token that expires at the provided instant.
	pub fn expiring_at(token: impl Into<String>, expires_at: OffsetDateTime) -> Result<Self> {
		let expires = expires_at
			.format(&Rfc3339)
			.map_err(|source| ConfigError::ExpiryFormat { instant: expires_at, source })?;

		Ok(Self::new(token, expires))
	}

	/// Parses the expiration, returning `None` when no token has been stored.
	pub fn expires_at(&self) -> Result<Option<OffsetDateTime>> {
		if self.expires.is_empty() {
			return Ok(None);
		}

		OffsetDateTime::parse(&self.expires, &Rfc3339)
			.map(Some)
			.map_err(|source| Error::InvalidExpiry { raw: self.expires.clone(), source })
	}

	/// Returns `true` unless the token outlives `instant` by more than [`RENEWAL_MARGIN`].
	///
	/// Unparseable expirations are surfaced instead of being treated as expired.
	pub fn needs_renewal_at(&self, instant: OffsetDateTime) -> Result<bool> {
		Ok(match self.expires_at()? {
			Some(expires_at) => expires_at - instant <= RENEWAL_MARGIN,
			None => true,
		})
	}

	/// Convenience helper that checks renewal using the current UTC instant.
	pub fn needs_renewal(&self) -> Result<bool> {
		self.needs_renewal_at(OffsetDateTime::now_utc())
	}
}
