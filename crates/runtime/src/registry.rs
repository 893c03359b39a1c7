//! Command registry: `(service, command id)` to [`EventKind`] lookup.
//!
//! Each service owns a [`ServiceTable`] mapping its command ids to symbolic
//! event kinds. The [`CommandRegistry`] maps service names to tables. Both are
//! built once and only read afterwards, so lookups need no locking and can run
//! from any number of threads.
//!
//! Unknown services and unknown command ids are first-class results
//! ([`Resolution::UnknownService`], [`Resolution::UnknownCommand`]), not errors.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use scope_protocol::{
	ConsoleMessage, DesktopWindowInfo, Header, Payload, QuickMenuId, QuickMenuInfo, QuickMenuItemId,
	ReadyStateChange, RuntimeId, RuntimeInfo, SelftestResult, WindowId, WindowInfo, service,
};

/// Symbolic identity of an event after routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	// ecmascript-debugger
	RuntimeStarted,
	RuntimeStopped,
	// window-manager
	WindowUpdated,
	WindowClosed,
	WindowActivated,
	WindowLoaded,
	// desktop-window-manager
	DesktopWindowShown,
	DesktopWindowUpdated,
	DesktopWindowActivated,
	DesktopWindowClosed,
	DesktopWindowPageChanged,
	DesktopWindowLoaded,
	QuickMenuShown,
	QuickMenuClosed,
	QuickMenuItemPressed,
	// console-logger
	ConsoleMessage,
	// ecmascript
	ReadyStateChanged,
	// http-logger
	Request,
	// core
	Active,
	Idle,
	// selftest
	SelftestResult,
	SelftestFinished,
}

impl EventKind {
	/// Protocol-style symbolic name, e.g. `"WINDOW_ACTIVATED"`.
	pub fn name(self) -> &'static str {
		match self {
			EventKind::RuntimeStarted => "RUNTIME_STARTED",
			EventKind::RuntimeStopped => "RUNTIME_STOPPED",
			EventKind::WindowUpdated => "WINDOW_UPDATED",
			EventKind::WindowClosed => "WINDOW_CLOSED",
			EventKind::WindowActivated => "WINDOW_ACTIVATED",
			EventKind::WindowLoaded => "WINDOW_LOADED",
			EventKind::DesktopWindowShown => "DESKTOP_WINDOW_SHOWN",
			EventKind::DesktopWindowUpdated => "DESKTOP_WINDOW_UPDATED",
			EventKind::DesktopWindowActivated => "DESKTOP_WINDOW_ACTIVATED",
			EventKind::DesktopWindowClosed => "DESKTOP_WINDOW_CLOSED",
			EventKind::DesktopWindowPageChanged => "DESKTOP_WINDOW_PAGE_CHANGED",
			EventKind::DesktopWindowLoaded => "DESKTOP_WINDOW_LOADED",
			EventKind::QuickMenuShown => "MENU_SHOWN",
			EventKind::QuickMenuClosed => "MENU_CLOSED",
			EventKind::QuickMenuItemPressed => "MENU_PRESSED",
			EventKind::ConsoleMessage => "CONSOLE_MESSAGE",
			EventKind::ReadyStateChanged => "READY_STATE_CHANGED",
			EventKind::Request => "REQUEST",
			EventKind::Active => "ON_ACTIVE",
			EventKind::Idle => "ON_IDLE",
			EventKind::SelftestResult => "RESULT",
			EventKind::SelftestFinished => "FINISHED",
		}
	}

	/// Fully qualified name of the message this kind's payload decodes into,
	/// or `None` for kinds that carry no payload.
	pub fn payload_type(self) -> Option<&'static str> {
		let name = match self {
			EventKind::RuntimeStarted => RuntimeInfo::TYPE_NAME,
			EventKind::RuntimeStopped => RuntimeId::TYPE_NAME,
			EventKind::WindowUpdated => WindowInfo::TYPE_NAME,
			EventKind::WindowClosed | EventKind::WindowActivated | EventKind::WindowLoaded => WindowId::TYPE_NAME,
			EventKind::DesktopWindowShown
			| EventKind::DesktopWindowUpdated
			| EventKind::DesktopWindowActivated
			| EventKind::DesktopWindowClosed
			| EventKind::DesktopWindowPageChanged
			| EventKind::DesktopWindowLoaded => DesktopWindowInfo::TYPE_NAME,
			EventKind::QuickMenuShown => QuickMenuInfo::TYPE_NAME,
			EventKind::QuickMenuClosed => QuickMenuId::TYPE_NAME,
			EventKind::QuickMenuItemPressed => QuickMenuItemId::TYPE_NAME,
			EventKind::ConsoleMessage => ConsoleMessage::TYPE_NAME,
			EventKind::ReadyStateChanged => ReadyStateChange::TYPE_NAME,
			EventKind::Request => Header::TYPE_NAME,
			EventKind::SelftestResult => SelftestResult::TYPE_NAME,
			EventKind::Active | EventKind::Idle | EventKind::SelftestFinished => return None,
		};
		Some(name)
	}
}

impl std::fmt::Display for EventKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Command ids of one service.
#[derive(Debug, Clone, Default)]
pub struct ServiceTable {
	commands: HashMap<u32, EventKind>,
}

impl ServiceTable {
	/// Builds a table from `(command id, kind)` pairs.
	///
	/// A repeated id keeps the last kind given for it.
	pub fn new(entries: &[(u32, EventKind)]) -> Self {
		Self {
			commands: entries.iter().copied().collect(),
		}
	}

	/// Looks up a command id.
	pub fn get(&self, command_id: u32) -> Option<EventKind> {
		self.commands.get(&command_id).copied()
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

const ECMASCRIPT_DEBUGGER: &[(u32, EventKind)] = &[(14, EventKind::RuntimeStarted), (15, EventKind::RuntimeStopped)];

const WINDOW_MANAGER: &[(u32, EventKind)] = &[
	(4, EventKind::WindowUpdated),
	(5, EventKind::WindowClosed),
	(6, EventKind::WindowActivated),
	(7, EventKind::WindowLoaded),
];

const DESKTOP_WINDOW_MANAGER: &[(u32, EventKind)] = &[
	(4, EventKind::DesktopWindowUpdated),
	(5, EventKind::DesktopWindowClosed),
	(6, EventKind::DesktopWindowActivated),
	(7, EventKind::DesktopWindowLoaded),
	(9, EventKind::QuickMenuShown),
	(10, EventKind::QuickMenuClosed),
	(11, EventKind::QuickMenuItemPressed),
	(13, EventKind::DesktopWindowShown),
	(14, EventKind::DesktopWindowPageChanged),
];

const CONSOLE_LOGGER: &[(u32, EventKind)] = &[(1, EventKind::ConsoleMessage)];

const ECMASCRIPT: &[(u32, EventKind)] = &[(4, EventKind::ReadyStateChanged)];

// OnResponse (2) is never routed.
const HTTP_LOGGER: &[(u32, EventKind)] = &[(1, EventKind::Request)];

const CORE: &[(u32, EventKind)] = &[(1, EventKind::Active), (2, EventKind::Idle)];

const SELFTEST: &[(u32, EventKind)] = &[(2, EventKind::SelftestResult), (3, EventKind::SelftestFinished)];

static STANDARD: LazyLock<Arc<CommandRegistry>> = LazyLock::new(|| {
	Arc::new(
		CommandRegistry::empty()
			.with_service(service::ECMASCRIPT_DEBUGGER, ServiceTable::new(ECMASCRIPT_DEBUGGER))
			.with_service(service::WINDOW_MANAGER, ServiceTable::new(WINDOW_MANAGER))
			.with_service(service::DESKTOP_WINDOW_MANAGER, ServiceTable::new(DESKTOP_WINDOW_MANAGER))
			.with_service(service::CONSOLE_LOGGER, ServiceTable::new(CONSOLE_LOGGER))
			.with_service(service::ECMASCRIPT, ServiceTable::new(ECMASCRIPT))
			.with_service(service::HTTP_LOGGER, ServiceTable::new(HTTP_LOGGER))
			.with_service(service::CORE, ServiceTable::new(CORE))
			.with_service(service::SELFTEST, ServiceTable::new(SELFTEST)),
	)
});

/// Outcome of a registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// The pair names a known event.
	Event(EventKind),
	/// No table is registered for the service.
	UnknownService,
	/// The service is known but does not define this command id.
	UnknownCommand,
}

impl Resolution {
	/// Returns the resolved kind, if any.
	pub fn event(self) -> Option<EventKind> {
		match self {
			Resolution::Event(kind) => Some(kind),
			Resolution::UnknownService | Resolution::UnknownCommand => None,
		}
	}
}

/// Two-level lookup from service name and command id to [`EventKind`].
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
	services: HashMap<Box<str>, ServiceTable>,
}

impl CommandRegistry {
	/// Creates a registry with no services.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Returns the shared registry of every service known to this crate.
	pub fn standard() -> Arc<CommandRegistry> {
		Arc::clone(&STANDARD)
	}

	/// Registers (or replaces) the table for `service`.
	pub fn with_service(mut self, service: impl Into<Box<str>>, table: ServiceTable) -> Self {
		self.services.insert(service.into(), table);
		self
	}

	/// Resolves a command id within the scope of `service`.
	pub fn resolve(&self, service: &str, command_id: u32) -> Resolution {
		match self.services.get(service) {
			None => Resolution::UnknownService,
			Some(table) => match table.get(command_id) {
				Some(kind) => Resolution::Event(kind),
				None => Resolution::UnknownCommand,
			},
		}
	}

	pub fn contains_service(&self, service: &str) -> bool {
		self.services.contains_key(service)
	}

	/// Names of all registered services, in no particular order.
	pub fn services(&self) -> impl Iterator<Item = &str> {
		self.services.keys().map(|name| &**name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_standard_registers_every_service() {
		let registry = CommandRegistry::standard();
		for name in service::ALL {
			assert!(registry.contains_service(name), "missing service {name}");
		}
		assert_eq!(registry.services().count(), service::ALL.len());
	}

	#[test]
	fn test_resolve_known_command() {
		let registry = CommandRegistry::standard();
		assert_eq!(
			registry.resolve("window-manager", 6),
			Resolution::Event(EventKind::WindowActivated)
		);
		assert_eq!(
			registry.resolve("ecmascript-debugger", 15),
			Resolution::Event(EventKind::RuntimeStopped)
		);
		assert_eq!(registry.resolve("core", 1), Resolution::Event(EventKind::Active));
	}

	#[test]
	fn test_ids_are_scoped_to_service() {
		let registry = CommandRegistry::standard();
		assert_eq!(registry.resolve("window-manager", 4).event(), Some(EventKind::WindowUpdated));
		assert_eq!(
			registry.resolve("desktop-window-manager", 4).event(),
			Some(EventKind::DesktopWindowUpdated)
		);
		assert_eq!(registry.resolve("console-logger", 1).event(), Some(EventKind::ConsoleMessage));
		assert_eq!(registry.resolve("http-logger", 1).event(), Some(EventKind::Request));
	}

	#[test]
	fn test_unknown_service() {
		let registry = CommandRegistry::standard();
		assert_eq!(registry.resolve("unknown-service", 1), Resolution::UnknownService);
		assert_eq!(registry.resolve("", 0), Resolution::UnknownService);
		// Service names are case sensitive.
		assert_eq!(registry.resolve("Window-Manager", 6), Resolution::UnknownService);
	}

	#[test]
	fn test_unknown_command() {
		let registry = CommandRegistry::standard();
		assert_eq!(registry.resolve("window-manager", 2), Resolution::UnknownCommand);
		assert_eq!(registry.resolve("http-logger", 2), Resolution::UnknownCommand);
		assert_eq!(registry.resolve("selftest", 1), Resolution::UnknownCommand);
		assert_eq!(registry.resolve("core", u32::MAX), Resolution::UnknownCommand);
		assert_eq!(Resolution::UnknownCommand.event(), None);
	}

	#[test]
	fn test_with_service_extends_registry() {
		let registry = CommandRegistry::empty()
			.with_service("window-manager", ServiceTable::new(&[(6, EventKind::WindowActivated)]))
			.with_service("window-manager-next", ServiceTable::new(&[(60, EventKind::WindowActivated)]));

		assert_eq!(registry.resolve("window-manager-next", 60).event(), Some(EventKind::WindowActivated));
		assert_eq!(registry.resolve("window-manager", 7), Resolution::UnknownCommand);
		assert_eq!(registry.resolve("core", 2), Resolution::UnknownService);
	}

	#[test]
	fn test_with_service_replaces_existing_table() {
		let registry = CommandRegistry::empty()
			.with_service("core", ServiceTable::new(&[(2, EventKind::Idle)]))
			.with_service("core", ServiceTable::new(&[(3, EventKind::Idle)]));

		assert_eq!(registry.resolve("core", 2), Resolution::UnknownCommand);
		assert_eq!(registry.resolve("core", 3).event(), Some(EventKind::Idle));
	}

	#[test]
	fn test_payload_types() {
		assert_eq!(EventKind::WindowActivated.payload_type(), Some("scope.wm.WindowID"));
		assert_eq!(EventKind::Request.payload_type(), Some("scope.http_logger.Header"));
		assert_eq!(
			EventKind::DesktopWindowPageChanged.payload_type(),
			Some("scope.desktop_wm.DesktopWindowInfo")
		);
		assert_eq!(EventKind::Idle.payload_type(), None);
		assert_eq!(EventKind::Active.payload_type(), None);
		assert_eq!(EventKind::SelftestFinished.payload_type(), None);
	}

	#[test]
	fn test_service_table() {
		let table = ServiceTable::new(WINDOW_MANAGER);
		assert_eq!(table.len(), 4);
		assert!(!table.is_empty());
		assert_eq!(table.get(5), Some(EventKind::WindowClosed));
		assert_eq!(table.get(1), None);
		assert!(ServiceTable::default().is_empty());
	}

	#[test]
	fn test_display_uses_symbolic_name() {
		assert_eq!(EventKind::WindowActivated.to_string(), "WINDOW_ACTIVATED");
		assert_eq!(EventKind::QuickMenuItemPressed.to_string(), "MENU_PRESSED");
	}
}
