//! Error types for the Scope runtime.

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Scope runtime.
///
/// Routing misses (unknown services or command ids) are not errors and never
/// appear here; see [`Dispatch::UnknownService`](crate::Dispatch::UnknownService).
#[derive(Debug, Error)]
pub enum Error {
	/// Payload of a recognized event did not decode into its message type.
	///
	/// Indicates a protocol version or framing mismatch with the remote end.
	#[error("Could not build {type_name}: {source}")]
	Decode {
		/// Fully qualified name of the message the payload should have held.
		type_name: &'static str,
		#[source]
		source: prost::DecodeError,
	},

	/// Payload of a recognized event decoded but lacks a required field.
	///
	/// Usually means the bytes belong to a different message type.
	#[error("Could not build {type_name}: missing required field {field}")]
	MissingField {
		type_name: &'static str,
		/// Field name; fields of nested messages are dotted, e.g. `rect.width`.
		field: String,
	},

	/// Invalid configuration document.
	#[error("Invalid configuration: {0}")]
	Config(#[from] serde_json::Error),
}

impl Error {
	/// Returns the target message name if this is a payload failure.
	pub fn type_name(&self) -> Option<&'static str> {
		match self {
			Error::Decode { type_name, .. } | Error::MissingField { type_name, .. } => Some(*type_name),
			Error::Config(_) => None,
		}
	}

	/// Returns true if a known event's payload could not be turned into its
	/// message type, whether malformed or incomplete.
	pub fn is_decode(&self) -> bool {
		matches!(self, Error::Decode { .. } | Error::MissingField { .. })
	}
}
