// self
use crate::obs::{CallKind, CallOutcome, RenewalReason};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"jamf_classic_call_total",
			"call" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Counts a guard-triggered token renewal, labeled by why it was needed.
pub fn count_renewal(reason: RenewalReason) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("jamf_classic_token_renewal_total", "reason" => reason.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = reason;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_call_outcome_noop_without_metrics() {
		record_call_outcome(CallKind::TokenAcquire, CallOutcome::Failure);
		count_renewal(RenewalReason::Expiring);
	}
}
