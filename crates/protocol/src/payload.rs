//! Common trait for event payload messages.

use crate::schema::Schema;

/// A protobuf message carried as the payload of a Scope event.
///
/// Every event kind that carries data decodes into exactly one type
/// implementing this trait. [`TYPE_NAME`](Self::TYPE_NAME) is the fully
/// qualified message name and is what decode errors report.
pub trait Payload: prost::Message + Default {
	/// Fully qualified protobuf message name (e.g. `"scope.wm.WindowID"`).
	const TYPE_NAME: &'static str;

	/// Fields the sender must set for the payload to be valid.
	const SCHEMA: Schema;
}

macro_rules! impl_payload {
	($($ty:ty => $name:literal { $($schema:tt)* }),+ $(,)?) => {
		$(
			impl $crate::payload::Payload for $ty {
				const TYPE_NAME: &'static str = $name;
				const SCHEMA: $crate::schema::Schema = $crate::schema::Schema { $($schema)* };
			}
		)+
	};
}

pub(crate) use impl_payload;
