// self
use crate::{_prelude::*, http::RequestShape};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedDispatch<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedDispatch<F> = F;

/// Span wrapped around every dispatch.
#[derive(Clone, Debug)]
pub struct DispatchSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl DispatchSpan {
	/// Creates a new span tagged with the request shape + stage.
	pub fn new(shape: RequestShape, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("bearer_dispatch.dispatch", shape = shape.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (shape, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedDispatch<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_passes_output_through() {
		let span = DispatchSpan::new(RequestShape::Target, "instrument_passes_output_through");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[cfg(feature = "tracing")]
	mod recorded {
		// std
		use std::sync::atomic::{AtomicUsize, Ordering};
		// crates.io
		use parking_lot::Mutex;
		use tracing::{
			Event, Metadata, Subscriber,
			field::{Field, Visit},
			span::{Attributes, Id, Record},
		};
		// self
		use super::*;

		#[derive(Clone, Default)]
		struct SpanLog {
			spans: Arc<Mutex<Vec<(&'static str, Option<String>)>>>,
			enters: Arc<AtomicUsize>,
		}
		impl Subscriber for SpanLog {
			fn enabled(&self, _: &Metadata<'_>) -> bool {
				true
			}

			fn new_span(&self, span: &Attributes<'_>) -> Id {
				let mut shape = ShapeField(None);

				span.record(&mut shape);

				let mut spans = self.spans.lock();

				spans.push((span.metadata().name(), shape.0));

				Id::from_u64(spans.len() as u64)
			}

			fn record(&self, _: &Id, _: &Record<'_>) {}

			fn record_follows_from(&self, _: &Id, _: &Id) {}

			fn event(&self, _: &Event<'_>) {}

			fn enter(&self, _: &Id) {
				self.enters.fetch_add(1, Ordering::SeqCst);
			}

			fn exit(&self, _: &Id) {}
		}

		struct ShapeField(Option<String>);
		impl Visit for ShapeField {
			fn record_str(&mut self, field: &Field, value: &str) {
				if field.name() == "shape" {
					self.0 = Some(value.into());
				}
			}

			fn record_debug(&mut self, _: &Field, _: &dyn Debug) {}
		}

		#[tokio::test]
		async fn instrument_enters_dispatch_span() {
			let log = SpanLog::default();
			let _default = tracing::subscriber::set_default(log.clone());
			let span = DispatchSpan::new(RequestShape::Prepared, "instrument_enters_dispatch_span");
			let value = span.instrument(async { 7 }).await;

			assert_eq!(value, 7);
			assert_eq!(
				log.spans.lock().as_slice(),
				[("bearer_dispatch.dispatch", Some("prepared".to_owned()))]
			);
			assert!(log.enters.load(Ordering::SeqCst) >= 1);
		}
	}
}
