// self
use crate::{http::RequestShape, obs::DispatchOutcome};

/// Records a dispatch outcome via the global metrics recorder (when enabled).
pub fn record_dispatch_outcome(shape: RequestShape, outcome: DispatchOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"bearer_dispatch_total",
			"shape" => shape.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (shape, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_dispatch_outcome_noop_without_metrics() {
		record_dispatch_outcome(RequestShape::Prepared, DispatchOutcome::Failure);
	}

	#[cfg(feature = "metrics")]
	mod recorded {
		// std
		use std::sync::{
			Arc,
			atomic::{AtomicU64, Ordering},
		};
		// crates.io
		use metrics::{
			Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
		};
		use parking_lot::Mutex;
		// self
		use super::*;

		type Labels = Vec<(String, String)>;

		#[derive(Default)]
		struct CounterLog(Mutex<Vec<(String, Labels, Arc<AtomicU64>)>>);
		impl Recorder for CounterLog {
			fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

			fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
				let value = Arc::new(AtomicU64::new(0));
				let labels =
					key.labels().map(|l| (l.key().to_owned(), l.value().to_owned())).collect();

				self.0.lock().push((key.name().to_owned(), labels, Arc::clone(&value)));

				Counter::from_arc(value)
			}

			fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
				Gauge::noop()
			}

			fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
				Histogram::noop()
			}
		}

		#[test]
		fn record_dispatch_outcome_increments_labelled_counter() {
			let log = CounterLog::default();

			metrics::with_local_recorder(&log, || {
				record_dispatch_outcome(RequestShape::Target, DispatchOutcome::Success);
			});

			let counters = log.0.lock();

			assert_eq!(counters.len(), 1);

			let (name, labels, value) = &counters[0];

			assert_eq!(name, "bearer_dispatch_total");
			assert_eq!(
				labels,
				&vec![
					("shape".to_owned(), "target".to_owned()),
					("outcome".to_owned(), "success".to_owned()),
				]
			);
			assert_eq!(value.load(Ordering::SeqCst), 1);
		}
	}
}
