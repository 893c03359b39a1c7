//! Typed event dispatch.
//!
//! [`EventDispatcher::dispatch`] turns one [`RawEvent`] into at most one
//! [`EventHandler`] callback:
//!
//! 1. `(service, command_id)` is resolved through the [`CommandRegistry`]
//! 2. Unknown services and unknown ids are ignored (`Ok`, no callback)
//! 3. Signal kinds invoke their zero-argument callback without decoding
//! 4. Other kinds decode the payload into their message type and invoke the
//!    callback with it; a payload that does not decode is an [`Error::Decode`],
//!    one missing a required field an [`Error::MissingField`], and no callback
//!    fires
//!
//! Routing misses and decode failures take different paths on purpose:
//! newer browsers may raise events this side does not know, which is expected,
//! while a known event whose payload does not parse means both ends disagree
//! on the protocol and the caller has to be able to stop.

use std::sync::Arc;

use scope_protocol::{
	ConsoleMessage, DesktopWindowInfo, Header, Payload, QuickMenuId, QuickMenuInfo, QuickMenuItemId, RawEvent,
	ReadyStateChange, RuntimeId, RuntimeInfo, SelftestResult, WindowId, WindowInfo,
};

use crate::error::{Error, Result};
use crate::handler::EventHandler;
use crate::registry::{CommandRegistry, EventKind, Resolution};

/// Outcome of a successful [`EventDispatcher::dispatch`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	/// The observer callback for this kind was invoked.
	Delivered(EventKind),
	/// The event is known but intentionally has no callback.
	Suppressed(EventKind),
	/// The service has no command table.
	UnknownService,
	/// The service does not define this command id.
	UnknownCommand,
}

impl Dispatch {
	/// Returns the routed kind, whether or not a callback fired.
	pub fn kind(self) -> Option<EventKind> {
		match self {
			Dispatch::Delivered(kind) | Dispatch::Suppressed(kind) => Some(kind),
			Dispatch::UnknownService | Dispatch::UnknownCommand => None,
		}
	}

	pub fn is_delivered(self) -> bool {
		matches!(self, Dispatch::Delivered(_))
	}

	/// Returns true for routing misses.
	pub fn is_ignored(self) -> bool {
		matches!(self, Dispatch::UnknownService | Dispatch::UnknownCommand)
	}
}

/// Routes raw events to a single [`EventHandler`].
///
/// The dispatcher keeps no per-call state; `dispatch` may be called from any
/// number of threads at once. Callbacks run on the calling thread in whatever
/// order the caller delivers events.
#[derive(Clone)]
pub struct EventDispatcher {
	registry: Arc<CommandRegistry>,
	handler: Arc<dyn EventHandler>,
}

impl EventDispatcher {
	/// Creates a dispatcher over the [standard registry](CommandRegistry::standard).
	pub fn new(handler: Arc<dyn EventHandler>) -> Self {
		Self::with_registry(CommandRegistry::standard(), handler)
	}

	/// Creates a dispatcher over a custom registry.
	pub fn with_registry(registry: Arc<CommandRegistry>, handler: Arc<dyn EventHandler>) -> Self {
		Self { registry, handler }
	}

	pub fn registry(&self) -> &CommandRegistry {
		&self.registry
	}

	/// Dispatches one event to the observer.
	///
	/// # Errors
	///
	/// Returns [`Error::Decode`] when the event is known but its payload does
	/// not decode into the kind's message type, or [`Error::MissingField`] when
	/// it decodes without a required field. Unknown services and command ids
	/// are not errors.
	pub fn dispatch(&self, event: &RawEvent) -> Result<Dispatch> {
		let kind = match self.registry.resolve(event.service(), event.command_id()) {
			Resolution::Event(kind) => kind,
			Resolution::UnknownService => return Ok(Dispatch::UnknownService),
			Resolution::UnknownCommand => return Ok(Dispatch::UnknownCommand),
		};

		let payload = event.payload();
		let handler = &*self.handler;

		match kind {
			EventKind::RuntimeStarted => handler.on_runtime_started(decode::<RuntimeInfo>(payload)?),
			EventKind::RuntimeStopped => handler.on_runtime_stopped(decode::<RuntimeId>(payload)?.runtime_id),

			EventKind::WindowUpdated => handler.on_window_updated(decode::<WindowInfo>(payload)?),
			EventKind::WindowClosed => handler.on_window_closed(decode::<WindowId>(payload)?.window_id),
			EventKind::WindowActivated => handler.on_window_activated(decode::<WindowId>(payload)?.window_id),
			EventKind::WindowLoaded => handler.on_window_loaded(decode::<WindowId>(payload)?.window_id),

			EventKind::DesktopWindowShown => handler.on_desktop_window_shown(decode::<DesktopWindowInfo>(payload)?),
			EventKind::DesktopWindowUpdated => handler.on_desktop_window_updated(decode::<DesktopWindowInfo>(payload)?),
			EventKind::DesktopWindowActivated => {
				handler.on_desktop_window_activated(decode::<DesktopWindowInfo>(payload)?)
			}
			EventKind::DesktopWindowClosed => handler.on_desktop_window_closed(decode::<DesktopWindowInfo>(payload)?),
			EventKind::DesktopWindowPageChanged => {
				handler.on_desktop_window_page_changed(decode::<DesktopWindowInfo>(payload)?)
			}
			EventKind::DesktopWindowLoaded => handler.on_desktop_window_loaded(decode::<DesktopWindowInfo>(payload)?),
			EventKind::QuickMenuShown => handler.on_quick_menu_shown(decode::<QuickMenuInfo>(payload)?),
			EventKind::QuickMenuClosed => handler.on_quick_menu_closed(decode::<QuickMenuId>(payload)?),
			EventKind::QuickMenuItemPressed => handler.on_quick_menu_item_pressed(decode::<QuickMenuItemId>(payload)?),

			EventKind::ConsoleMessage => handler.on_console_message(decode::<ConsoleMessage>(payload)?),

			EventKind::ReadyStateChanged => handler.on_ready_state_change(decode::<ReadyStateChange>(payload)?),

			// The observer only cares which window issued the request.
			EventKind::Request => handler.on_request(decode::<Header>(payload)?.window_id),

			// The browser only becomes active in reaction to our own commands.
			EventKind::Active => return Ok(Dispatch::Suppressed(kind)),
			EventKind::Idle => handler.on_idle(),

			EventKind::SelftestResult => handler.on_selftest_result(decode::<SelftestResult>(payload)?),
			EventKind::SelftestFinished => handler.on_selftest_done(),
		}

		Ok(Dispatch::Delivered(kind))
	}
}

impl std::fmt::Debug for EventDispatcher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventDispatcher")
			.field("registry", &self.registry)
			.finish_non_exhaustive()
	}
}

/// Decodes `payload` as `P`, naming `P` in the error.
///
/// prost fills absent proto2 `required` fields with defaults, so the bytes
/// are checked against [`Payload::SCHEMA`] as well.
fn decode<P: Payload>(payload: &[u8]) -> Result<P> {
	let decode_error = |source: prost::DecodeError| Error::Decode {
		type_name: P::TYPE_NAME,
		source,
	};

	let message = P::decode(payload).map_err(decode_error)?;
	match P::SCHEMA.missing_field(payload).map_err(decode_error)? {
		None => Ok(message),
		Some(field) => Err(Error::MissingField {
			type_name: P::TYPE_NAME,
			field,
		}),
	}
}
