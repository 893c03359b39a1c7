//! Payloads of the `ecmascript` service.

use crate::payload::impl_payload;

/// Document ready state reached by a runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ReadyState {
	DomContentLoaded = 1,
	Load = 2,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReadyStateChange {
	#[prost(uint32, required, tag = "1")]
	pub runtime_id: u32,
	#[prost(enumeration = "ReadyState", required, tag = "2")]
	pub state: i32,
}

impl_payload! {
	ReadyStateChange => "scope.ecmascript.ReadyStateChange" {
		required: &[(1, "runtime_id"), (2, "state")],
		nested: &[],
	},
}
