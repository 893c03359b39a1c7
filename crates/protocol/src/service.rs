//! Names of the Scope services that raise events.
//!
//! Command identifiers are only meaningful together with one of these names.

/// Script runtimes starting and stopping.
pub const ECMASCRIPT_DEBUGGER: &str = "ecmascript-debugger";

/// Document windows (tabs) of the browser.
pub const WINDOW_MANAGER: &str = "window-manager";

/// Native desktop windows and quick menus of the browser UI.
pub const DESKTOP_WINDOW_MANAGER: &str = "desktop-window-manager";

/// Messages written to the error console.
pub const CONSOLE_LOGGER: &str = "console-logger";

/// Document ready-state changes.
pub const ECMASCRIPT: &str = "ecmascript";

/// Outgoing HTTP requests.
pub const HTTP_LOGGER: &str = "http-logger";

/// Browser activity state.
pub const CORE: &str = "core";

/// Built-in selftest runs.
pub const SELFTEST: &str = "selftest";

/// Every service with events, in registration order.
pub const ALL: &[&str] = &[
	ECMASCRIPT_DEBUGGER,
	WINDOW_MANAGER,
	DESKTOP_WINDOW_MANAGER,
	CONSOLE_LOGGER,
	ECMASCRIPT,
	HTTP_LOGGER,
	CORE,
	SELFTEST,
];
