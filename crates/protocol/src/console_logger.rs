//! Payloads of the `console-logger` service.

use crate::payload::impl_payload;

/// A message written to the error console.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConsoleMessage {
	/// Window the message originates from, `0` for browser-wide messages.
	#[prost(uint32, required, tag = "1")]
	pub window_id: u32,
	/// Seconds since the epoch.
	#[prost(uint32, required, tag = "2")]
	pub time: u32,
	#[prost(string, required, tag = "3")]
	pub description: String,
	#[prost(string, optional, tag = "4")]
	pub uri: Option<String>,
	#[prost(string, optional, tag = "5")]
	pub context: Option<String>,
	/// Subsystem that raised the message, e.g. `"ecmascript"` or `"css"`.
	#[prost(string, optional, tag = "6")]
	pub source: Option<String>,
	/// `"information"`, `"warning"`, `"error"` or `"critical"`.
	#[prost(string, optional, tag = "7")]
	pub severity: Option<String>,
}

impl_payload! {
	ConsoleMessage => "scope.console_logger.ConsoleMessage" {
		required: &[(1, "window_id"), (2, "time"), (3, "description")],
		nested: &[],
	},
}
