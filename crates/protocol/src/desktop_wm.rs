//! Payloads of the `desktop-window-manager` service.
//!
//! Desktop windows are the native windows of the browser UI (the main browser
//! window, dialogs, panels), as opposed to the document windows reported by
//! the `window-manager` service. Quick menus are the context and main menus
//! drawn by the UI toolkit.

use crate::payload::impl_payload;
use crate::schema::Schema;

/// Kind of native window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DesktopWindowType {
	Unknown = 0,
	Dialog = 1,
	Normal = 2,
}

/// Placement state of a native window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DesktopWindowState {
	Restored = 0,
	Minimized = 1,
	Maximized = 2,
	Fullscreen = 3,
}

/// Screen rectangle in pixels.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct DesktopWindowRect {
	#[prost(int32, required, tag = "1")]
	pub x: i32,
	#[prost(int32, required, tag = "2")]
	pub y: i32,
	#[prost(uint32, required, tag = "3")]
	pub width: u32,
	#[prost(uint32, required, tag = "4")]
	pub height: u32,
}

/// Full description of a native window, sent with every desktop window event.
#[derive(Clone, PartialEq, prost::Message)]
pub struct DesktopWindowInfo {
	#[prost(uint32, required, tag = "1")]
	pub window_id: u32,
	#[prost(string, required, tag = "2")]
	pub title: String,
	/// Internal (non-localized) window name, e.g. `"Browser Window"`.
	#[prost(string, required, tag = "3")]
	pub name: String,
	#[prost(enumeration = "DesktopWindowType", required, tag = "4")]
	pub window_type: i32,
	#[prost(bool, required, tag = "5")]
	pub on_screen: bool,
	#[prost(enumeration = "DesktopWindowState", required, tag = "6")]
	pub state: i32,
	#[prost(message, optional, tag = "7")]
	pub rect: Option<DesktopWindowRect>,
	#[prost(bool, required, tag = "8")]
	pub active: bool,
}

/// Identifies a quick menu.
#[derive(Clone, PartialEq, prost::Message)]
pub struct QuickMenuId {
	#[prost(string, required, tag = "1")]
	pub menu_name: String,
	/// Owning desktop window; absent for menus not bound to a window.
	#[prost(uint32, optional, tag = "2")]
	pub window_id: Option<u32>,
}

/// One entry of a quick menu.
#[derive(Clone, PartialEq, prost::Message)]
pub struct QuickMenuItemInfo {
	#[prost(string, required, tag = "1")]
	pub text: String,
	/// Action triggered when the item is pressed.
	#[prost(string, required, tag = "2")]
	pub action: String,
	#[prost(string, optional, tag = "3")]
	pub action_param: Option<String>,
	#[prost(bool, required, tag = "4")]
	pub enabled: bool,
	#[prost(bool, required, tag = "5")]
	pub checked: bool,
	#[prost(bool, required, tag = "6")]
	pub bold: bool,
	#[prost(string, optional, tag = "7")]
	pub shortcut_letter: Option<String>,
	/// Name of the submenu this item opens.
	#[prost(string, optional, tag = "8")]
	pub submenu: Option<String>,
	#[prost(string, optional, tag = "9")]
	pub shortcut: Option<String>,
	#[prost(message, optional, tag = "10")]
	pub rect: Option<DesktopWindowRect>,
	#[prost(uint32, required, tag = "11")]
	pub row: u32,
}

/// A quick menu that has just been shown.
#[derive(Clone, PartialEq, prost::Message)]
pub struct QuickMenuInfo {
	#[prost(message, optional, tag = "1")]
	pub menu_id: Option<QuickMenuId>,
	#[prost(message, optional, tag = "2")]
	pub rect: Option<DesktopWindowRect>,
	#[prost(uint32, required, tag = "3")]
	pub window_id: u32,
	#[prost(message, repeated, tag = "4")]
	pub menu_items: Vec<QuickMenuItemInfo>,
}

/// Identifies a pressed quick menu item by its visible text.
#[derive(Clone, PartialEq, prost::Message)]
pub struct QuickMenuItemId {
	#[prost(string, required, tag = "1")]
	pub menu_text: String,
}

const RECT: Schema = Schema {
	required: &[(1, "x"), (2, "y"), (3, "width"), (4, "height")],
	nested: &[],
};

const MENU_ID: Schema = Schema {
	required: &[(1, "menu_name")],
	nested: &[],
};

const MENU_ITEM: Schema = Schema {
	required: &[(1, "text"), (2, "action"), (4, "enabled"), (5, "checked"), (6, "bold"), (11, "row")],
	nested: &[(10, "rect", &RECT)],
};

impl_payload! {
	DesktopWindowInfo => "scope.desktop_wm.DesktopWindowInfo" {
		required: &[
			(1, "window_id"),
			(2, "title"),
			(3, "name"),
			(4, "window_type"),
			(5, "on_screen"),
			(6, "state"),
			(8, "active"),
		],
		nested: &[(7, "rect", &RECT)],
	},
	QuickMenuId => "scope.desktop_wm.QuickMenuID" { ..MENU_ID },
	QuickMenuInfo => "scope.desktop_wm.QuickMenuInfo" {
		required: &[(3, "window_id")],
		nested: &[(1, "menu_id", &MENU_ID), (2, "rect", &RECT), (4, "menu_items", &MENU_ITEM)],
	},
	QuickMenuItemId => "scope.desktop_wm.QuickMenuItemID" {
		required: &[(1, "menu_text")],
		nested: &[],
	},
}
