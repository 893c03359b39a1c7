//! Payloads of the `ecmascript-debugger` service.

use crate::payload::impl_payload;

/// Identifies a script runtime that has stopped.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RuntimeId {
	#[prost(uint32, required, tag = "1")]
	pub runtime_id: u32,
}

/// Describes a script runtime that has just started.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RuntimeInfo {
	#[prost(uint32, required, tag = "1")]
	pub runtime_id: u32,
	/// Path of frames from the top-level document, e.g. `_top/frame1`.
	#[prost(string, required, tag = "2")]
	pub html_frame_path: String,
	#[prost(uint32, required, tag = "3")]
	pub window_id: u32,
	/// Object id of the runtime's global object.
	#[prost(uint32, required, tag = "4")]
	pub object_id: u32,
	#[prost(string, required, tag = "5")]
	pub uri: String,
	#[prost(string, optional, tag = "6")]
	pub description: Option<String>,
}

impl_payload! {
	RuntimeId => "scope.esdbg.RuntimeID" {
		required: &[(1, "runtime_id")],
		nested: &[],
	},
	RuntimeInfo => "scope.esdbg.RuntimeInfo" {
		required: &[(1, "runtime_id"), (2, "html_frame_path"), (3, "window_id"), (4, "object_id"), (5, "uri")],
		nested: &[],
	},
}
