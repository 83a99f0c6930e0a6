// self
use crate::obs::{CallOutcome, TransportMode};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(mode: TransportMode, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"emarsys_client_call_total",
			"mode" => mode.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (mode, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_call_outcome_noop_without_metrics() {
		record_call_outcome(TransportMode::Concurrent, CallOutcome::Failure);
	}
}
