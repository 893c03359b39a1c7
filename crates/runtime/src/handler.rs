//! Observer interface receiving typed events.

use scope_protocol::{
	ConsoleMessage, DesktopWindowInfo, QuickMenuId, QuickMenuInfo, QuickMenuItemId, ReadyStateChange, RuntimeInfo,
	SelftestResult, WindowInfo,
};

/// Receives decoded events from an [`EventDispatcher`](crate::EventDispatcher).
///
/// There is one method per [`EventKind`](crate::EventKind) that reaches an
/// observer, and none has a default body: an implementation that forgets an
/// event does not compile.
///
/// Callbacks run synchronously on the thread that called
/// [`dispatch`](crate::EventDispatcher::dispatch). The dispatcher does not
/// serialize concurrent calls, so implementations that keep state must
/// synchronize it themselves.
///
/// There is deliberately no callback for the `core` service's `ON_ACTIVE`
/// event. The browser only becomes active in reaction to commands this side
/// sent, so the state is already known.
pub trait EventHandler: Send + Sync {
	// ecmascript-debugger

	fn on_runtime_started(&self, info: RuntimeInfo);

	fn on_runtime_stopped(&self, runtime_id: u32);

	// window-manager

	fn on_window_activated(&self, window_id: u32);

	fn on_window_closed(&self, window_id: u32);

	fn on_window_updated(&self, info: WindowInfo);

	fn on_window_loaded(&self, window_id: u32);

	// desktop-window-manager

	fn on_desktop_window_shown(&self, info: DesktopWindowInfo);

	fn on_desktop_window_updated(&self, info: DesktopWindowInfo);

	fn on_desktop_window_activated(&self, info: DesktopWindowInfo);

	fn on_desktop_window_closed(&self, info: DesktopWindowInfo);

	fn on_desktop_window_page_changed(&self, info: DesktopWindowInfo);

	fn on_desktop_window_loaded(&self, info: DesktopWindowInfo);

	fn on_quick_menu_shown(&self, info: QuickMenuInfo);

	fn on_quick_menu_closed(&self, menu_id: QuickMenuId);

	fn on_quick_menu_item_pressed(&self, item_id: QuickMenuItemId);

	// console-logger

	fn on_console_message(&self, message: ConsoleMessage);

	// ecmascript

	fn on_ready_state_change(&self, change: ReadyStateChange);

	// http-logger

	/// A document window issued an HTTP request.
	fn on_request(&self, window_id: u32);

	// core

	/// The browser has no pending work.
	fn on_idle(&self);

	// selftest

	fn on_selftest_result(&self, result: SelftestResult);

	/// All requested selftest modules have finished.
	fn on_selftest_done(&self);
}
