//! The deframed event envelope delivered by the transport.

use serde::{Deserialize, Serialize};

use crate::payload::Payload;

/// An undecoded event as received from the remote browser.
///
/// `command_id` is scoped to `service`: the same number names different
/// events under different services. The payload layout is determined entirely
/// by the `(service, command_id)` pair.
///
/// Records are immutable once constructed. They serialize to JSON with the
/// payload as a base64 string, which is the format used for captured event
/// transcripts:
///
/// ```json
/// {"service": "window-manager", "commandId": 6, "payload": "CCo="}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
	service: String,
	command_id: u32,
	#[serde(with = "base64_bytes")]
	payload: Vec<u8>,
}

impl RawEvent {
	/// Creates an event from its already-deframed parts.
	pub fn new(service: impl Into<String>, command_id: u32, payload: Vec<u8>) -> Self {
		Self {
			service: service.into(),
			command_id,
			payload,
		}
	}

	/// Creates an event carrying the protobuf encoding of `message`.
	pub fn with_payload<P: Payload>(service: impl Into<String>, command_id: u32, message: &P) -> Self {
		Self::new(service, command_id, message.encode_to_vec())
	}

	/// Creates an event with an empty payload.
	pub fn signal(service: impl Into<String>, command_id: u32) -> Self {
		Self::new(service, command_id, Vec::new())
	}

	/// Name of the service that raised the event.
	pub fn service(&self) -> &str {
		&self.service
	}

	/// Service-scoped command identifier.
	pub fn command_id(&self) -> u32 {
		self.command_id
	}

	/// Raw payload bytes.
	pub fn payload(&self) -> &[u8] {
		&self.payload
	}
}

mod base64_bytes {
	use base64::Engine;
	use base64::engine::general_purpose::STANDARD;
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&STANDARD.encode(bytes))
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let encoded: String = Deserialize::deserialize(deserializer)?;
		STANDARD.decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
	}
}
