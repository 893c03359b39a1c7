//! Event loop configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the [`EventLoop`](crate::EventLoop) does when a known event's payload
/// fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeErrorPolicy {
	/// End the loop and return the error.
	#[default]
	Stop,
	/// Log the error, count it and keep draining events.
	Continue,
}

/// Configuration for an [`EventLoop`](crate::EventLoop).
///
/// Missing keys take their defaults; unknown keys are rejected:
///
/// ```json
/// {"onDecodeError": "stop", "traceIgnored": true}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EventLoopConfig {
	pub on_decode_error: DecodeErrorPolicy,
	/// Log routing misses and events without a callback at `trace` level.
	pub trace_ignored: bool,
}

impl Default for EventLoopConfig {
	fn default() -> Self {
		Self {
			on_decode_error: DecodeErrorPolicy::Stop,
			trace_ignored: true,
		}
	}
}

impl EventLoopConfig {
	/// Parses a JSON configuration document.
	///
	/// # Errors
	///
	/// Returns [`Error::Config`](crate::Error::Config) for malformed JSON,
	/// unknown keys or unknown policy values.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn with_decode_error_policy(mut self, policy: DecodeErrorPolicy) -> Self {
		self.on_decode_error = policy;
		self
	}
}
