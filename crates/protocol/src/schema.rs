//! Required field bookkeeping for payload messages.
//!
//! prost decodes proto2 `required` fields into plain values and fills in a
//! default when the field is absent, so a decoded message cannot tell whether
//! the sender actually set them. A [`Schema`] lists the tags a message must
//! carry and is checked against the encoded bytes instead.

use prost::DecodeError;
use prost::encoding::{self, DecodeContext, WireType};

/// Required tags of one message type.
#[derive(Debug)]
pub struct Schema {
	/// `(tag, field name)` of every required field.
	pub required: &'static [(u32, &'static str)],
	/// Message-typed fields whose own required fields are checked wherever
	/// they occur, including every element of a repeated field.
	pub nested: &'static [(u32, &'static str, &'static Schema)],
}

impl Schema {
	/// A message without required fields.
	pub const EMPTY: Schema = Schema {
		required: &[],
		nested: &[],
	};

	/// Returns the first required field that `buf` does not carry.
	///
	/// Fields of nested messages are reported as a dotted path, e.g.
	/// `menu_items.row`.
	///
	/// # Errors
	///
	/// Returns the underlying [`DecodeError`] when `buf` is not a well-formed
	/// message encoding.
	pub fn missing_field(&self, mut buf: &[u8]) -> Result<Option<String>, DecodeError> {
		let mut seen = vec![false; self.required.len()];

		while !buf.is_empty() {
			let (tag, wire_type) = encoding::decode_key(&mut buf)?;
			if let Some(index) = self.required.iter().position(|&(required, _)| required == tag) {
				seen[index] = true;
			}

			let field = buf;
			encoding::skip_field(wire_type, tag, &mut buf, DecodeContext::default())?;

			if wire_type != WireType::LengthDelimited {
				continue;
			}
			let Some(&(_, name, schema)) = self.nested.iter().find(|nested| nested.0 == tag) else {
				continue;
			};

			// Strip the length prefix off the bytes the field occupied.
			let mut body = &field[..field.len() - buf.len()];
			encoding::decode_varint(&mut body)?;
			if let Some(inner) = schema.missing_field(body)? {
				return Ok(Some(format!("{name}.{inner}")));
			}
		}

		Ok(self
			.required
			.iter()
			.zip(&seen)
			.find(|(_, seen)| !**seen)
			.map(|(&(_, name), _)| name.to_string()))
	}
}
