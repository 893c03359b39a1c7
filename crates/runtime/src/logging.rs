//! An [`EventHandler`] that reports every event through `tracing`.

use scope_protocol::{
	ConsoleMessage, DesktopWindowInfo, QuickMenuId, QuickMenuInfo, QuickMenuItemId, ReadyStateChange, RuntimeInfo,
	SelftestResult, SelftestResultType, WindowInfo,
};

use crate::handler::EventHandler;

/// Tracing target for logged events.
pub const EVENT_TARGET: &str = "scope_runtime::event";

/// Logs events instead of acting on them.
///
/// Lifecycle events go out at `debug`. Console messages use a level derived
/// from their severity and selftest failures are logged at `warn`. Useful on
/// its own while diagnosing a session, or as a stand-in observer in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventHandler;

impl LoggingEventHandler {
	pub fn new() -> Self {
		Self
	}

	fn desktop_window(event: &'static str, info: &DesktopWindowInfo) {
		tracing::debug!(
			target: EVENT_TARGET,
			window_id = info.window_id,
			name = %info.name,
			title = %info.title,
			active = info.active,
			"{event}"
		);
	}
}

impl EventHandler for LoggingEventHandler {
	fn on_runtime_started(&self, info: RuntimeInfo) {
		tracing::debug!(
			target: EVENT_TARGET,
			runtime_id = info.runtime_id,
			window_id = info.window_id,
			frame = %info.html_frame_path,
			uri = %info.uri,
			"runtime started"
		);
	}

	fn on_runtime_stopped(&self, runtime_id: u32) {
		tracing::debug!(target: EVENT_TARGET, runtime_id, "runtime stopped");
	}

	fn on_window_activated(&self, window_id: u32) {
		tracing::debug!(target: EVENT_TARGET, window_id, "window activated");
	}

	fn on_window_closed(&self, window_id: u32) {
		tracing::debug!(target: EVENT_TARGET, window_id, "window closed");
	}

	fn on_window_updated(&self, info: WindowInfo) {
		tracing::debug!(
			target: EVENT_TARGET,
			window_id = info.window_id,
			title = %info.title,
			window_type = %info.window_type,
			opener_id = info.opener_id,
			"window updated"
		);
	}

	fn on_window_loaded(&self, window_id: u32) {
		tracing::debug!(target: EVENT_TARGET, window_id, "window loaded");
	}

	fn on_desktop_window_shown(&self, info: DesktopWindowInfo) {
		Self::desktop_window("desktop window shown", &info);
	}

	fn on_desktop_window_updated(&self, info: DesktopWindowInfo) {
		Self::desktop_window("desktop window updated", &info);
	}

	fn on_desktop_window_activated(&self, info: DesktopWindowInfo) {
		Self::desktop_window("desktop window activated", &info);
	}

	fn on_desktop_window_closed(&self, info: DesktopWindowInfo) {
		Self::desktop_window("desktop window closed", &info);
	}

	fn on_desktop_window_page_changed(&self, info: DesktopWindowInfo) {
		Self::desktop_window("desktop window page changed", &info);
	}

	fn on_desktop_window_loaded(&self, info: DesktopWindowInfo) {
		Self::desktop_window("desktop window loaded", &info);
	}

	fn on_quick_menu_shown(&self, info: QuickMenuInfo) {
		let menu = info.menu_id.as_ref().map(|id| id.menu_name.as_str()).unwrap_or_default();
		tracing::debug!(
			target: EVENT_TARGET,
			menu,
			window_id = info.window_id,
			items = info.menu_items.len(),
			"quick menu shown"
		);
	}

	fn on_quick_menu_closed(&self, menu_id: QuickMenuId) {
		tracing::debug!(target: EVENT_TARGET, menu = %menu_id.menu_name, "quick menu closed");
	}

	fn on_quick_menu_item_pressed(&self, item_id: QuickMenuItemId) {
		tracing::debug!(target: EVENT_TARGET, item = %item_id.menu_text, "quick menu item pressed");
	}

	fn on_console_message(&self, message: ConsoleMessage) {
		let source = message.source.as_deref().unwrap_or_default();
		let uri = message.uri.as_deref().unwrap_or_default();
		match message.severity.as_deref() {
			Some("error") | Some("critical") => {
				tracing::error!(target: EVENT_TARGET, window_id = message.window_id, source, uri, "{}", message.description)
			}
			Some("warning") => {
				tracing::warn!(target: EVENT_TARGET, window_id = message.window_id, source, uri, "{}", message.description)
			}
			_ => tracing::info!(target: EVENT_TARGET, window_id = message.window_id, source, uri, "{}", message.description),
		}
	}

	fn on_ready_state_change(&self, change: ReadyStateChange) {
		tracing::debug!(
			target: EVENT_TARGET,
			runtime_id = change.runtime_id,
			state = ?change.state(),
			"ready state changed"
		);
	}

	fn on_request(&self, window_id: u32) {
		tracing::trace!(target: EVENT_TARGET, window_id, "request");
	}

	fn on_idle(&self) {
		tracing::debug!(target: EVENT_TARGET, "browser idle");
	}

	fn on_selftest_result(&self, result: SelftestResult) {
		let module = result.module.as_deref().unwrap_or_default();
		match result.result() {
			SelftestResultType::Fail => tracing::warn!(
				target: EVENT_TARGET,
				test = %result.test_name,
				module,
				reason = result.description.as_deref().unwrap_or_default(),
				"selftest failed"
			),
			outcome => tracing::debug!(
				target: EVENT_TARGET,
				test = %result.test_name,
				module,
				?outcome,
				"selftest result"
			),
		}
	}

	fn on_selftest_done(&self) {
		tracing::info!(target: EVENT_TARGET, "selftest finished");
	}
}
