//! Optional observability helpers for authenticated calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `jamf_classic.call` with the `call` (token
//!   exchange or resource request) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `jamf_classic_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`, and the
//!   `jamf_classic_token_renewal_total` counter labeled by renewal `reason`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, auth::BearerToken};

/// Call kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Bearer-token exchange against `/api/v1/auth/token`.
	TokenAcquire,
	/// Authenticated request against a classic API resource.
	Resource,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::TokenAcquire => "token_acquire",
			CallKind::Resource => "resource",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}

	/// Maps a finished call to its outcome label.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => CallOutcome::Success,
			Err(_) => CallOutcome::Failure,
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Why the expiration guard decided to fetch a new bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenewalReason {
	/// Nothing has been cached yet.
	Missing,
	/// Cached token expires within the renewal margin.
	Expiring,
}
impl RenewalReason {
	/// Classifies a token the guard has already judged stale.
	pub fn of(token: &BearerToken) -> Self {
		if token.expires.is_empty() { RenewalReason::Missing } else { RenewalReason::Expiring }
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RenewalReason::Missing => "missing",
			RenewalReason::Expiring => "expiring",
		}
	}
}
impl Display for RenewalReason {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Reports a renewal to both the tracing and metrics backends, when enabled.
pub fn record_renewal(reason: RenewalReason) {
	trace_renewal(reason);
	count_renewal(reason);
}
