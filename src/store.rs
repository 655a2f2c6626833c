//! In-memory holder for the client's current bearer token.

// self
use crate::{_prelude::*, auth::BearerToken};

/// Thread-safe slot holding the most recently acquired [`BearerToken`].
///
/// Readers always receive a full copy, so a concurrent renewal is observed either entirely or
/// not at all.
#[derive(Debug, Default)]
pub struct TokenStore(RwLock<BearerToken>);
impl TokenStore {
	/// Creates a store seeded with `token`.
	pub fn with_token(token: BearerToken) -> Self {
		Self(RwLock::new(token))
	}

	/// Returns a copy of the current token.
	pub fn snapshot(&self) -> BearerToken {
		self.0.read().clone()
	}

	/// Overwrites the current token, returning the replaced one.
	pub fn replace(&self, token: BearerToken) -> BearerToken {
		std::mem::replace(&mut *self.0.write(), token)
	}
}
