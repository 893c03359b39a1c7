//! Payloads of the `window-manager` service.

use crate::payload::impl_payload;

/// Identifies a document window.
#[derive(Clone, PartialEq, prost::Message)]
pub struct WindowId {
	#[prost(uint32, required, tag = "1")]
	pub window_id: u32,
}

/// Current state of a document window.
#[derive(Clone, PartialEq, prost::Message)]
pub struct WindowInfo {
	#[prost(uint32, required, tag = "1")]
	pub window_id: u32,
	#[prost(string, required, tag = "2")]
	pub title: String,
	/// `"normal"`, `"download"`, `"cache"`, `"plugins"`, `"history"`, `"help"`,
	/// `"mail_view"`, `"mail_compose"`, `"newsfeed_view"`, `"devtools"` or `"gadget"`.
	#[prost(string, required, tag = "3")]
	pub window_type: String,
	/// Window that opened this one, `0` when opened by the user.
	#[prost(uint32, required, tag = "4")]
	pub opener_id: u32,
	#[prost(string, optional, tag = "5")]
	pub extension_name: Option<String>,
}

impl_payload! {
	WindowId => "scope.wm.WindowID" {
		required: &[(1, "window_id")],
		nested: &[],
	},
	WindowInfo => "scope.wm.WindowInfo" {
		required: &[(1, "window_id"), (2, "title"), (3, "window_type"), (4, "opener_id")],
		nested: &[],
	},
}
