//! Payloads of the `selftest` service.

use crate::payload::impl_payload;

/// Outcome of a single selftest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SelftestResultType {
	Pass = 1,
	Fail = 2,
	Skip = 3,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SelftestResult {
	#[prost(enumeration = "SelftestResultType", required, tag = "1")]
	pub result: i32,
	#[prost(string, required, tag = "2")]
	pub test_name: String,
	#[prost(string, optional, tag = "3")]
	pub module: Option<String>,
	/// Failure or skip reason.
	#[prost(string, optional, tag = "4")]
	pub description: Option<String>,
	#[prost(string, optional, tag = "5")]
	pub file: Option<String>,
	#[prost(uint32, optional, tag = "6")]
	pub line: Option<u32>,
}

impl_payload! {
	SelftestResult => "scope.selftest.SelftestResult" {
		required: &[(1, "result"), (2, "test_name")],
		nested: &[],
	},
}
