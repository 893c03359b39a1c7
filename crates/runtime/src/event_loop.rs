//! Event loop feeding transport events into an [`EventDispatcher`].
//!
//! The transport pushes deframed [`RawEvent`]s into an unbounded channel (see
//! [`event_channel`]); [`EventLoop::run`] drains it in delivery order and
//! dispatches each event on the loop's task. What happens after a decode
//! failure is decided by [`EventLoopConfig::on_decode_error`].

use scope_protocol::RawEvent;
use tokio::sync::mpsc;

use crate::config::{DecodeErrorPolicy, EventLoopConfig};
use crate::dispatcher::{Dispatch, EventDispatcher};
use crate::error::Result;

/// Creates the channel a transport uses to hand events to an [`EventLoop`].
pub fn event_channel() -> (mpsc::UnboundedSender<RawEvent>, mpsc::UnboundedReceiver<RawEvent>) {
	mpsc::unbounded_channel()
}

/// Counters collected while draining events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventLoopStats {
	/// Events that reached an observer callback.
	pub delivered: u64,
	/// Known events that intentionally have no callback.
	pub suppressed: u64,
	/// Events for unknown services or command ids.
	pub ignored: u64,
	/// Known events whose payload failed to decode.
	pub failed: u64,
}

impl EventLoopStats {
	pub fn total(&self) -> u64 {
		self.delivered + self.suppressed + self.ignored + self.failed
	}
}

/// Drains a channel of raw events into a dispatcher.
#[derive(Debug)]
pub struct EventLoop {
	dispatcher: EventDispatcher,
	config: EventLoopConfig,
}

impl EventLoop {
	pub fn new(dispatcher: EventDispatcher, config: EventLoopConfig) -> Self {
		Self { dispatcher, config }
	}

	pub fn dispatcher(&self) -> &EventDispatcher {
		&self.dispatcher
	}

	pub fn config(&self) -> &EventLoopConfig {
		&self.config
	}

	/// Dispatches events until every sender has been dropped.
	///
	/// The receiver is borrowed so that a caller can inspect or resume the
	/// remaining events after a failure.
	///
	/// # Errors
	///
	/// With [`DecodeErrorPolicy::Stop`], returns the first decode failure; the
	/// events after it stay in the channel.
	pub async fn run(&self, rx: &mut mpsc::UnboundedReceiver<RawEvent>) -> Result<EventLoopStats> {
		let mut stats = EventLoopStats::default();

		while let Some(event) = rx.recv().await {
			match self.dispatcher.dispatch(&event) {
				Ok(Dispatch::Delivered(_)) => stats.delivered += 1,
				Ok(Dispatch::Suppressed(kind)) => {
					if self.config.trace_ignored {
						tracing::trace!(service = event.service(), %kind, "Event has no callback (ignored)");
					}
					stats.suppressed += 1;
				}
				Ok(outcome @ (Dispatch::UnknownService | Dispatch::UnknownCommand)) => {
					if self.config.trace_ignored {
						tracing::trace!(
							service = event.service(),
							command_id = event.command_id(),
							?outcome,
							"Unrecognized event (forward-compatible, ignored)"
						);
					}
					stats.ignored += 1;
				}
				Err(e) => {
					tracing::error!(
						service = event.service(),
						command_id = event.command_id(),
						error = %e,
						"Failed to dispatch event"
					);
					stats.failed += 1;
					if self.config.on_decode_error == DecodeErrorPolicy::Stop {
						return Err(e);
					}
				}
			}
		}

		tracing::debug!(?stats, "Event channel closed");
		Ok(stats)
	}
}
