//! Shared observer for integration tests.

#![allow(dead_code)]

use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;
use scope_protocol::{
	ConsoleMessage, DesktopWindowInfo, QuickMenuId, QuickMenuInfo, QuickMenuItemId, ReadyStateChange, RuntimeInfo,
	SelftestResult, WindowInfo,
};
use scope_runtime::{EventDispatcher, EventHandler};

/// One observed callback: its name and the `Debug` rendering of its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
	pub name: &'static str,
	pub arg: String,
}

impl Callback {
	pub fn new(name: &'static str, arg: impl Debug) -> Self {
		Self {
			name,
			arg: format!("{arg:?}"),
		}
	}
}

/// Records every callback in the order it fired.
#[derive(Default)]
pub struct Recorder {
	callbacks: Mutex<Vec<Callback>>,
}

impl Recorder {
	fn record(&self, name: &'static str, arg: impl Debug) {
		self.callbacks.lock().push(Callback::new(name, arg));
	}

	pub fn take(&self) -> Vec<Callback> {
		std::mem::take(&mut *self.callbacks.lock())
	}

	pub fn names(&self) -> Vec<&'static str> {
		self.callbacks.lock().iter().map(|c| c.name).collect()
	}
}

impl EventHandler for Recorder {
	fn on_runtime_started(&self, info: RuntimeInfo) {
		self.record("on_runtime_started", info);
	}

	fn on_runtime_stopped(&self, runtime_id: u32) {
		self.record("on_runtime_stopped", runtime_id);
	}

	fn on_window_activated(&self, window_id: u32) {
		self.record("on_window_activated", window_id);
	}

	fn on_window_closed(&self, window_id: u32) {
		self.record("on_window_closed", window_id);
	}

	fn on_window_updated(&self, info: WindowInfo) {
		self.record("on_window_updated", info);
	}

	fn on_window_loaded(&self, window_id: u32) {
		self.record("on_window_loaded", window_id);
	}

	fn on_desktop_window_shown(&self, info: DesktopWindowInfo) {
		self.record("on_desktop_window_shown", info);
	}

	fn on_desktop_window_updated(&self, info: DesktopWindowInfo) {
		self.record("on_desktop_window_updated", info);
	}

	fn on_desktop_window_activated(&self, info: DesktopWindowInfo) {
		self.record("on_desktop_window_activated", info);
	}

	fn on_desktop_window_closed(&self, info: DesktopWindowInfo) {
		self.record("on_desktop_window_closed", info);
	}

	fn on_desktop_window_page_changed(&self, info: DesktopWindowInfo) {
		self.record("on_desktop_window_page_changed", info);
	}

	fn on_desktop_window_loaded(&self, info: DesktopWindowInfo) {
		self.record("on_desktop_window_loaded", info);
	}

	fn on_quick_menu_shown(&self, info: QuickMenuInfo) {
		self.record("on_quick_menu_shown", info);
	}

	fn on_quick_menu_closed(&self, menu_id: QuickMenuId) {
		self.record("on_quick_menu_closed", menu_id);
	}

	fn on_quick_menu_item_pressed(&self, item_id: QuickMenuItemId) {
		self.record("on_quick_menu_item_pressed", item_id);
	}

	fn on_console_message(&self, message: ConsoleMessage) {
		self.record("on_console_message", message);
	}

	fn on_ready_state_change(&self, change: ReadyStateChange) {
		self.record("on_ready_state_change", change);
	}

	fn on_request(&self, window_id: u32) {
		self.record("on_request", window_id);
	}

	fn on_idle(&self) {
		self.record("on_idle", ());
	}

	fn on_selftest_result(&self, result: SelftestResult) {
		self.record("on_selftest_result", result);
	}

	fn on_selftest_done(&self) {
		self.record("on_selftest_done", ());
	}
}

pub fn recording_dispatcher() -> (EventDispatcher, Arc<Recorder>) {
	let recorder = Arc::new(Recorder::default());
	(EventDispatcher::new(recorder.clone()), recorder)
}
