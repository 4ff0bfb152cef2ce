//! Optional observability helpers for dispatches.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `bearer_dispatch.dispatch` with the `shape`
//!   (request shape) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `bearer_dispatch_total` counter for every
//!   attempt/success/failure, labeled by `shape` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DispatchOutcome {
	/// Entry to the dispatcher.
	Attempt,
	/// Transport returned a response.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl DispatchOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DispatchOutcome::Attempt => "attempt",
			DispatchOutcome::Success => "success",
			DispatchOutcome::Failure => "failure",
		}
	}
}
impl Display for DispatchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
