//! Payloads of the `http-logger` service.

use crate::payload::impl_payload;

/// Header block of an outgoing HTTP request.
///
/// Only the window id is of interest to event consumers; it tells which
/// document window issued the request.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Header {
	#[prost(uint32, required, tag = "1")]
	pub request_id: u32,
	#[prost(uint32, required, tag = "2")]
	pub window_id: u32,
	/// Milliseconds since the epoch.
	#[prost(uint64, required, tag = "3")]
	pub time: u64,
	/// Raw request line and headers.
	#[prost(string, required, tag = "4")]
	pub header: String,
}

impl_payload! {
	Header => "scope.http_logger.Header" {
		required: &[(1, "request_id"), (2, "window_id"), (3, "time"), (4, "header")],
		nested: &[],
	},
}
