//! Optional observability helpers for transport calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `emarsys_client.call` with the `mode`
//!   (transport), `method`, and `path` fields.
//! - Enable `metrics` to increment the `emarsys_client_call_total` counter for every
//!   attempt/success/failure, labeled by `mode` + `outcome`.
//!
//! Observation is a side effect only: attaching either feature never alters
//! control flow or classification.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Execution modes observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportMode {
	/// Synchronous round trip occupying the calling thread.
	Blocking,
	/// Cooperatively scheduled round trip suspending at network I/O.
	Concurrent,
}
impl TransportMode {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TransportMode::Blocking => "blocking",
			TransportMode::Concurrent => "concurrent",
		}
	}
}
impl Display for TransportMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a transport `call`.
	Attempt,
	/// Successful classification.
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
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
