//! Expiration guard run before every authenticated request.

// self
use crate::{_prelude::*, auth::BearerToken, client::Client, error::ResultExt, obs};

impl Client {
	/// Returns a token that stays valid for more than five minutes, renewing it when needed.
	///
	/// An empty store counts as expired. A stored expiration that is not RFC3339 is an error and
	/// no renewal is attempted. Renewals are serialized: callers that queued behind an in-flight
	/// renewal re-check the store and reuse its result.
	pub async fn ensure_valid_token(&self) -> Result<BearerToken> {
		let current = self.store.snapshot();

		if !current.needs_renewal()? {
			return Ok(current);
		}

		let _singleflight = self.renewal.lock().await;
		let current = self.store.snapshot();

		if !current.needs_renewal()? {
			return Ok(current);
		}

		obs::record_renewal(obs::RenewalReason::of(&current));

		self.acquire_token().await.context(|| "error requesting new bearer token")
	}
}
